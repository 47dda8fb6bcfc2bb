use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes file names relative to the session location rather than the
/// process working directory.
#[derive(Clone)]
pub struct PathCompleter {
    base_dir: PathBuf,
}

impl PathCompleter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn set_base_dir(&mut self, base_dir: &Path) {
        self.base_dir = base_dir.to_path_buf();
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (typed_dir, file_prefix) = split_input(incomplete);
        let dir_to_search = self.base_dir.join(&typed_dir);

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&dir_to_search) {
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(&file_prefix) {
                        matches.push(completion_pair(name, &entry.path(), &typed_dir));
                    }
                }
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits typed text into the directory part, as typed, and the name prefix.
fn split_input(incomplete: &str) -> (String, String) {
    match incomplete.rfind('/') {
        Some(pos) => (
            incomplete[..=pos].to_string(),
            incomplete[pos + 1..].to_string(),
        ),
        None => (String::new(), incomplete.to_string()),
    }
}

fn completion_pair(name: &str, path: &Path, typed_dir: &str) -> Pair {
    let shown = format!("{}{}", typed_dir, name);
    if path.is_dir() {
        Pair {
            display: format!("{}/", shown),
            replacement: format!("{}/", shown),
        }
    } else {
        Pair {
            display: shown.clone(),
            replacement: format!("{} ", shown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input() {
        assert_eq!(split_input("no"), (String::new(), "no".to_string()));
        assert_eq!(split_input("sub/fi"), ("sub/".to_string(), "fi".to_string()));
        assert_eq!(split_input("/etc/"), ("/etc/".to_string(), String::new()));
    }

    #[test]
    fn test_completes_against_base_dir() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("notes.txt"), b"").unwrap();
        fs::write(temp.path().join("numbers.csv"), b"").unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested").join("inner.txt"), b"").unwrap();

        let completer = PathCompleter::new(temp.path());
        let replacements: Vec<String> = completer
            .complete_path("n")
            .into_iter()
            .map(|pair| pair.replacement)
            .collect();
        assert_eq!(replacements, vec!["nested/", "notes.txt ", "numbers.csv "]);

        let nested = completer.complete_path("nested/i");
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].replacement, "nested/inner.txt ");
    }

    #[test]
    fn test_follows_base_dir_changes() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("deep.txt"), b"").unwrap();

        let mut completer = PathCompleter::new(temp.path());
        assert!(completer.complete_path("de").is_empty());
        completer.set_base_dir(&temp.path().join("sub"));
        assert_eq!(completer.complete_path("de").len(), 1);
    }
}
