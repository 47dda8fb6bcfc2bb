use crate::core::config::ConfigError;
use crate::core::env::EnvError;
use crate::core::fs::FsError;

#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    Startup(FsError),
    Env(EnvError),
    ConfigError(ConfigError),
    FlagError(String),
    CtrlC(String),
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}

impl From<FsError> for ShellError {
    fn from(err: FsError) -> Self {
        ShellError::Startup(err)
    }
}

impl From<EnvError> for ShellError {
    fn from(err: EnvError) -> Self {
        ShellError::Env(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Startup(e) => write!(f, "Cannot enter home directory: {}", e),
            ShellError::Env(e) => write!(f, "Environment error: {}", e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
            ShellError::CtrlC(msg) => write!(f, "Ctrl-C error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
