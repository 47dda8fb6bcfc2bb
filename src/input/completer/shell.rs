use std::{borrow::Cow, path::Path};

use super::{command::CommandCompleter, path::PathCompleter};
use crate::core::commands::CommandTable;
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
}

impl ShellCompleter {
    pub fn new(table: &CommandTable, current_dir: &Path, highlighter: SyntaxHighlighter) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(table),
            path_completer: PathCompleter::new(current_dir),
            highlighter,
        }
    }

    /// Path completion follows the session location after `cd` and `up`.
    pub fn set_current_dir(&mut self, current_dir: &Path) {
        self.path_completer.set_base_dir(current_dir);
    }

    fn complete_words(&self, line_up_to_cursor: &str, pos: usize) -> (usize, Vec<Pair>) {
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();
        if line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        match words.as_slice() {
            [] => (0, self.command_completer.complete_command("")),
            [word] => {
                let start = line_up_to_cursor.rfind(word).unwrap_or(0);
                (start, self.command_completer.complete_command(word))
            }
            [.., last_word] => {
                let start = if last_word.is_empty() {
                    pos
                } else {
                    line_up_to_cursor.rfind(last_word).unwrap_or(pos)
                };
                (start, self.path_completer.complete_path(last_word))
            }
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let known = line
            .split_whitespace()
            .next()
            .is_some_and(|token| self.command_completer.is_command(token));
        Cow::Owned(self.highlighter.highlight_command(line, known))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(self.highlighter.highlight_hint(hint))
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_words(&line[..pos], pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn completer(dir: &Path) -> ShellCompleter {
        ShellCompleter::new(&CommandTable::new(), dir, SyntaxHighlighter::plain())
    }

    #[test]
    fn test_first_word_completes_commands() {
        let temp = tempfile::tempdir().unwrap();
        let completer = completer(temp.path());

        let (start, pairs) = completer.complete_words("  decom", 7);
        assert_eq!(start, 2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].replacement, "decompress ");
    }

    #[test]
    fn test_later_words_complete_paths() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("report.txt"), b"").unwrap();
        let completer = completer(temp.path());

        let line = "cp rep";
        let (start, pairs) = completer.complete_words(line, line.len());
        assert_eq!(start, 3);
        assert_eq!(pairs[0].replacement, "report.txt ");

        let line = "cp report.txt ";
        let (start, pairs) = completer.complete_words(line, line.len());
        assert_eq!(start, line.len());
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_highlight_is_plain_text_without_color() {
        let temp = tempfile::tempdir().unwrap();
        let completer = completer(temp.path());
        assert_eq!(completer.highlight("ls", 2), "ls");
        assert_eq!(completer.highlight("nope x", 6), "nope x");
    }
}
