use super::EnvError;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct EnvPaths {
    home: PathBuf,
}

impl EnvPaths {
    /// Resolves the user's home directory, preferring `dirs` and falling back to `$HOME`.
    pub fn new() -> Result<Self, EnvError> {
        let home = dirs::home_dir()
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .ok_or(EnvError::HomeDirNotFound)?;
        Self::with_home(home)
    }

    pub fn with_home(home: PathBuf) -> Result<Self, EnvError> {
        if !home.is_absolute() {
            return Err(EnvError::InvalidPath(home));
        }
        Ok(Self { home })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn get_home_file(&self, name: &str) -> PathBuf {
        self.home.join(name)
    }
}
