use std::path::{Path, PathBuf};

/// Per-session state. The current directory only changes through
/// [`SessionState::set_current_dir`], which the file manager calls after
/// verifying the target.
#[derive(Debug, Clone)]
pub struct SessionState {
    current_dir: PathBuf,
    username: String,
    home_dir: PathBuf,
    initialized: bool,
}

impl SessionState {
    pub fn new(username: String, home_dir: PathBuf) -> Self {
        Self {
            current_dir: home_dir.clone(),
            username,
            home_dir,
            initialized: false,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }
}
