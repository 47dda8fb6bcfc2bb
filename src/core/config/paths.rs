use crate::core::env::EnvPaths;
use std::path::PathBuf;

pub const RC_FILE: &str = ".filenavrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the path came from `--config`; a missing file is then an error.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new(env: &EnvPaths) -> Self {
        ConfigPaths {
            rc_path: env.get_home_file(RC_FILE),
            explicit: false,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: path.into(),
            explicit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_paths() {
        let env = EnvPaths::with_home(PathBuf::from("/home/testuser")).unwrap();
        let paths = ConfigPaths::new(&env);

        assert_eq!(paths.rc_path, PathBuf::from("/home/testuser/.filenavrc"));
        assert!(!paths.explicit);
    }

    #[test]
    fn test_explicit_path() {
        let paths = ConfigPaths::from_file("/etc/filenav.rc");
        assert_eq!(paths.rc_path, PathBuf::from("/etc/filenav.rc"));
        assert!(paths.explicit);
    }
}
