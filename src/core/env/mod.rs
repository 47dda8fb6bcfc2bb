mod info;
mod paths;

pub use info::{cpu_summary, OsParam};
pub use paths::EnvPaths;

use std::path::PathBuf;

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    IoError(std::io::Error),
    InvalidPath(PathBuf),
    UnknownParameter(String),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "Home directory not found"),
            EnvError::IoError(e) => write!(f, "IO error: {}", e),
            EnvError::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            EnvError::UnknownParameter(key) => write!(f, "Unknown OS parameter: {}", key),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<std::io::Error> for EnvError {
    fn from(e: std::io::Error) -> Self {
        EnvError::IoError(e)
    }
}
