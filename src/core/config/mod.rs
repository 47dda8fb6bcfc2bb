use std::fmt;

mod aliases;
mod loader;
mod paths;

use super::commands::CommandTable;
use aliases::AliasManager;
use loader::ConfigLoader;
pub use paths::{ConfigPaths, RC_FILE};

pub const DEFAULT_PROMPT: &str = "> ";

pub struct Config {
    paths: ConfigPaths,
    aliases: AliasManager,
    color: Option<bool>,
    log_filter: Option<String>,
    prompt: String,
    warnings: Vec<String>,
}

impl Config {
    pub fn new(paths: ConfigPaths) -> Self {
        Config {
            paths,
            aliases: AliasManager::new(),
            color: None,
            log_filter: None,
            prompt: DEFAULT_PROMPT.to_string(),
            warnings: Vec::new(),
        }
    }

    pub fn load(&mut self) -> Result<(), ConfigError> {
        let paths = self.paths.clone();
        let loader: ConfigLoader<'_> = ConfigLoader::new(&paths);
        loader.load_configs(self)?;
        Ok(())
    }

    /// `None` means detect from the terminal.
    pub fn color(&self) -> Option<bool> {
        self.color
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Problems found while loading; reported once logging is up.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// The built-in command table extended with the configured aliases.
    pub fn command_table(&mut self) -> CommandTable {
        let mut table = CommandTable::new();
        for err in self.aliases.apply_to(&mut table) {
            self.warnings.push(format!("alias ignored: {}", err));
        }
        table
    }

    fn warn(&mut self, message: String) {
        self.warnings.push(message);
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
