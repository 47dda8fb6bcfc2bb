mod completer;

pub use completer::{CommandCompleter, PathCompleter, ShellCompleter};
