//! Filesystem operations against an explicitly tracked current directory.
//!
//! Relative paths are always resolved against [`FileManager::current_dir`];
//! the process working directory is never read or changed.

pub mod stream;

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::interrupt::{Guarded, Interrupt};
use crate::core::state::SessionState;

#[derive(Debug)]
pub enum FsError {
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    NotADirectory(PathBuf),
    AlreadyExists(PathBuf),
    NoFileName(PathBuf),
    NotStarted,
}

impl FsError {
    fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        FsError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::Io { op, path, source } => {
                write!(f, "{} {}: {}", op, path.display(), source)
            }
            FsError::NotADirectory(path) => write!(f, "not a directory: {}", path.display()),
            FsError::AlreadyExists(path) => write!(f, "already exists: {}", path.display()),
            FsError::NoFileName(path) => write!(f, "no file name in: {}", path.display()),
            FsError::NotStarted => write!(f, "home directory not entered yet"),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub struct FileManager {
    state: SessionState,
    interrupt: Interrupt,
}

impl FileManager {
    pub fn new(username: impl Into<String>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            state: SessionState::new(username.into(), home_dir.into()),
            interrupt: Interrupt::new(),
        }
    }

    /// Enters the home directory and marks the manager ready.
    pub fn start(&mut self) -> Result<&Path, FsError> {
        let home = self.state.home_dir().to_path_buf();
        self.enter(&home)?;
        self.state.mark_initialized();
        tracing::info!(dir = %self.current_dir().display(), "session started");
        Ok(self.current_dir())
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_initialized()
    }

    /// Shared with the Ctrl-C handler; reads stop once it fires.
    pub fn interrupt(&self) -> Interrupt {
        self.interrupt.clone()
    }

    pub fn current_dir(&self) -> &Path {
        self.state.current_dir()
    }

    pub fn username(&self) -> &str {
        self.state.username()
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.current_dir().join(path)
    }

    fn open(&self, op: &'static str, path: &Path) -> Result<Guarded<File>, FsError> {
        let file = File::open(path).map_err(|e| FsError::io(op, path, e))?;
        Ok(self.interrupt.guard(file))
    }

    fn enter(&mut self, target: &Path) -> Result<(), FsError> {
        let canonical =
            fs::canonicalize(target).map_err(|e| FsError::io("resolve", target, e))?;
        if !canonical.is_dir() {
            return Err(FsError::NotADirectory(canonical));
        }
        self.state.set_current_dir(canonical);
        Ok(())
    }

    pub fn change_dir(&mut self, target: &str) -> Result<&Path, FsError> {
        let path = self.resolve(target);
        self.enter(&path)?;
        Ok(self.current_dir())
    }

    /// Moves to the parent directory; stays put at the filesystem root.
    pub fn go_up(&mut self) -> Result<&Path, FsError> {
        let current = self.current_dir();
        let parent = current.parent().unwrap_or(current).to_path_buf();
        self.enter(&parent)?;
        Ok(self.current_dir())
    }

    /// Entry names in the order the directory yields them.
    pub fn list(&self) -> Result<Vec<String>, FsError> {
        let dir = self.current_dir();
        fs::read_dir(dir)
            .and_then(|entries| {
                entries
                    .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
                    .collect()
            })
            .map_err(|e| FsError::io("list", dir, e))
    }

    pub fn read_to(&self, path: &str, out: &mut dyn Write) -> Result<u64, FsError> {
        let path = self.resolve(path);
        let mut file = self.open("open", &path)?;
        stream::pump(&mut file, out).map_err(|e| FsError::io("read", &path, e))
    }

    pub fn create_empty(&self, name: &str) -> Result<PathBuf, FsError> {
        let path = self.resolve(name);
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| FsError::io("create", &path, e))?;
        Ok(path)
    }

    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<PathBuf, FsError> {
        let from = self.resolve(old_name);
        let to = self.resolve(new_name);
        ensure_vacant(&to)?;
        fs::rename(&from, &to).map_err(|e| FsError::io("rename", &from, e))?;
        Ok(to)
    }

    pub fn copy(&self, source: &str, destination: &str) -> Result<PathBuf, FsError> {
        let from = self.resolve(source);
        let mut file = self.open("open", &from)?;
        let to = self.destination(&from, destination, |name| name.to_string())?;
        stream::copy_to_new(&mut file, &to).map_err(|e| FsError::io("copy", &to, e))?;
        Ok(to)
    }

    /// Same-volume rename; never falls back to copy and delete.
    pub fn relocate(&self, source: &str, destination: &str) -> Result<PathBuf, FsError> {
        let from = self.resolve(source);
        fs::symlink_metadata(&from).map_err(|e| FsError::io("stat", &from, e))?;
        let to = self.destination(&from, destination, |name| name.to_string())?;
        ensure_vacant(&to)?;
        fs::rename(&from, &to).map_err(|e| FsError::io("move", &from, e))?;
        Ok(to)
    }

    pub fn remove(&self, path: &str) -> Result<PathBuf, FsError> {
        let path = self.resolve(path);
        fs::remove_file(&path).map_err(|e| FsError::io("delete", &path, e))?;
        Ok(path)
    }

    pub fn hash(&self, path: &str) -> Result<String, FsError> {
        let path = self.resolve(path);
        let mut file = self.open("open", &path)?;
        stream::sha256_hex(&mut file).map_err(|e| FsError::io("hash", &path, e))
    }

    pub fn compress(&self, source: &str, destination: &str) -> Result<PathBuf, FsError> {
        let from = self.resolve(source);
        let mut file = self.open("open", &from)?;
        let to = self.destination(&from, destination, |name| format!("{}.gz", name))?;
        stream::gzip_to_new(&mut file, &to).map_err(|e| FsError::io("compress", &to, e))?;
        Ok(to)
    }

    pub fn decompress(&self, source: &str, destination: &str) -> Result<PathBuf, FsError> {
        let from = self.resolve(source);
        let file = self.open("open", &from)?;
        let to = self.destination(&from, destination, |name| {
            name.strip_suffix(".gz").unwrap_or(name).to_string()
        })?;
        stream::gunzip_to_new(file, &to).map_err(|e| FsError::io("decompress", &to, e))?;
        Ok(to)
    }

    /// Resolves `destination`; an existing directory receives the source's
    /// file name, mapped through `name_in_dir`.
    fn destination<F>(&self, source: &Path, destination: &str, name_in_dir: F) -> Result<PathBuf, FsError>
    where
        F: Fn(&str) -> String,
    {
        let to = self.resolve(destination);
        if !to.is_dir() {
            return Ok(to);
        }
        let name = source
            .file_name()
            .map(|name| name.to_string_lossy())
            .ok_or_else(|| FsError::NoFileName(source.to_path_buf()))?;
        Ok(to.join(name_in_dir(name.as_ref())))
    }
}

fn ensure_vacant(path: &Path) -> Result<(), FsError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Err(FsError::AlreadyExists(path.to_path_buf())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsError::io("stat", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileManager) {
        let temp = tempfile::tempdir().unwrap();
        let mut manager = FileManager::new("tester", temp.path());
        manager.start().unwrap();
        (temp, manager)
    }

    #[test]
    fn test_start_enters_home() {
        let (temp, manager) = setup();
        assert!(manager.is_ready());
        assert_eq!(manager.current_dir(), fs::canonicalize(temp.path()).unwrap());
        assert_eq!(manager.username(), "tester");
    }

    #[test]
    fn test_start_fails_without_home() {
        let temp = tempfile::tempdir().unwrap();
        let mut manager = FileManager::new("tester", temp.path().join("missing"));
        assert!(manager.start().is_err());
        assert!(!manager.is_ready());
    }

    #[test]
    fn test_cd_and_up() {
        let (_temp, mut manager) = setup();
        let start = manager.current_dir().to_path_buf();
        fs::create_dir(start.join("sub")).unwrap();

        assert_eq!(manager.change_dir("sub").unwrap(), start.join("sub"));
        assert_eq!(manager.go_up().unwrap(), start);
    }

    #[test]
    fn test_cd_failure_keeps_location() {
        let (_temp, mut manager) = setup();
        let start = manager.current_dir().to_path_buf();
        fs::write(start.join("plain.txt"), b"x").unwrap();

        assert!(manager.change_dir("nowhere").is_err());
        assert!(matches!(
            manager.change_dir("plain.txt"),
            Err(FsError::NotADirectory(_))
        ));
        assert_eq!(manager.current_dir(), start);
    }

    #[test]
    fn test_cd_absolute() {
        let (_temp, mut manager) = setup();
        let other = tempfile::tempdir().unwrap();
        let target = other.path().to_string_lossy().into_owned();
        assert_eq!(
            manager.change_dir(&target).unwrap(),
            fs::canonicalize(other.path()).unwrap()
        );
    }

    #[test]
    fn test_up_at_root_stays() {
        let (_temp, mut manager) = setup();
        while manager.current_dir().parent().is_some() {
            manager.go_up().unwrap();
        }
        let root = manager.current_dir().to_path_buf();
        assert_eq!(manager.go_up().unwrap(), root);
    }

    #[test]
    fn test_list_names() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("a.txt"), b"").unwrap();
        fs::create_dir(manager.resolve(".hidden")).unwrap();

        let mut names = manager.list().unwrap();
        names.sort();
        assert_eq!(names, vec![".hidden", "a.txt"]);
    }

    #[test]
    fn test_create_is_exclusive() {
        let (_temp, manager) = setup();
        let path = manager.create_empty("x.txt").unwrap();
        fs::write(&path, b"keep me").unwrap();

        assert!(manager.create_empty("x.txt").is_err());
        assert_eq!(fs::read(&path).unwrap(), b"keep me");
    }

    #[test]
    fn test_read_streams_bytes() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("data.bin"), [0u8, 159, 146, 150]).unwrap();

        let mut out = Vec::new();
        assert_eq!(manager.read_to("data.bin", &mut out).unwrap(), 4);
        assert_eq!(out, vec![0u8, 159, 146, 150]);
        assert!(manager.read_to("missing", &mut out).is_err());
    }

    #[test]
    fn test_rename_refuses_overwrite() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("a"), b"a").unwrap();
        fs::write(manager.resolve("b"), b"b").unwrap();

        assert!(matches!(
            manager.rename("a", "b"),
            Err(FsError::AlreadyExists(_))
        ));
        manager.rename("a", "c").unwrap();
        assert!(!manager.resolve("a").exists());
        assert_eq!(fs::read(manager.resolve("c")).unwrap(), b"a");
    }

    #[test]
    fn test_copy_keeps_source() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("src.txt"), b"payload").unwrap();
        fs::create_dir(manager.resolve("dir")).unwrap();

        let into_dir = manager.copy("src.txt", "dir").unwrap();
        assert_eq!(into_dir, manager.resolve("dir").join("src.txt"));
        manager.copy("src.txt", "dup.txt").unwrap();

        assert_eq!(fs::read(manager.resolve("src.txt")).unwrap(), b"payload");
        assert_eq!(fs::read(into_dir).unwrap(), b"payload");
        assert_eq!(fs::read(manager.resolve("dup.txt")).unwrap(), b"payload");
    }

    #[test]
    fn test_copy_failures_leave_no_file() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("src.txt"), b"new").unwrap();
        fs::write(manager.resolve("taken.txt"), b"old").unwrap();
        fs::create_dir(manager.resolve("folder")).unwrap();

        assert!(manager.copy("missing.txt", "out.txt").is_err());
        assert!(!manager.resolve("out.txt").exists());
        assert!(manager.copy("src.txt", "taken.txt").is_err());
        assert_eq!(fs::read(manager.resolve("taken.txt")).unwrap(), b"old");
        assert!(manager.copy("folder", "folder-copy").is_err());
        assert!(!manager.resolve("folder-copy").exists());
    }

    #[test]
    fn test_interrupted_copy_removes_partial_output() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("big.bin"), vec![7u8; stream::CHUNK_SIZE * 2]).unwrap();

        let interrupt = manager.interrupt();
        assert!(interrupt.begin());
        assert!(interrupt.trigger());

        assert!(manager.copy("big.bin", "half.bin").is_err());
        assert!(!manager.resolve("half.bin").exists());
        assert!(manager.compress("big.bin", "half.gz").is_err());
        assert!(!manager.resolve("half.gz").exists());
        assert!(interrupt.finish());
    }

    #[test]
    fn test_move_into_directory() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("m.txt"), b"moving").unwrap();
        fs::create_dir(manager.resolve("target")).unwrap();

        let moved = manager.relocate("m.txt", "target").unwrap();
        assert_eq!(moved, manager.resolve("target").join("m.txt"));
        assert!(!manager.resolve("m.txt").exists());
        assert_eq!(fs::read(moved).unwrap(), b"moving");
        assert!(manager.relocate("m.txt", "target").is_err());
    }

    #[test]
    fn test_remove() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("gone.txt"), b"").unwrap();
        fs::create_dir(manager.resolve("dir")).unwrap();

        manager.remove("gone.txt").unwrap();
        assert!(!manager.resolve("gone.txt").exists());
        assert!(manager.remove("gone.txt").is_err());
        assert!(manager.remove("dir").is_err());
    }

    #[test]
    fn test_hash_tracks_content() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("a"), b"same").unwrap();
        fs::write(manager.resolve("b"), b"same").unwrap();
        fs::write(manager.resolve("c"), b"sane").unwrap();

        let a = manager.hash("a").unwrap();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(a, manager.hash("a").unwrap());
        assert_eq!(a, manager.hash("b").unwrap());
        assert_ne!(a, manager.hash("c").unwrap());
    }

    #[test]
    fn test_compress_round_trip() {
        let (_temp, manager) = setup();
        let content: Vec<u8> = (0..200_000u32).map(|i| (i % 7 + i % 13) as u8).collect();
        fs::write(manager.resolve("blob.bin"), &content).unwrap();
        fs::create_dir(manager.resolve("out")).unwrap();

        let packed = manager.compress("blob.bin", "out").unwrap();
        assert_eq!(packed, manager.resolve("out").join("blob.bin.gz"));
        assert!(fs::metadata(&packed).unwrap().len() < content.len() as u64);

        manager.decompress("out/blob.bin.gz", "restored.bin").unwrap();
        assert_eq!(fs::read(manager.resolve("restored.bin")).unwrap(), content);

        let unpacked = manager.decompress("out/blob.bin.gz", "out").unwrap();
        assert_eq!(unpacked, manager.resolve("out").join("blob.bin"));
        assert_eq!(fs::read(unpacked).unwrap(), content);
    }

    #[test]
    fn test_decompress_garbage_fails() {
        let (_temp, manager) = setup();
        fs::write(manager.resolve("bad.gz"), b"not compressed").unwrap();
        assert!(manager.decompress("bad.gz", "bad.txt").is_err());
        assert!(!manager.resolve("bad.txt").exists());
    }
}
