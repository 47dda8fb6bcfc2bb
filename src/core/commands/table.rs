use std::fmt;

/// Logical commands understood by the file manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandKind {
    Up,
    Exit,
    List,
    Cd,
    Cat,
    Add,
    Rename,
    Copy,
    Move,
    Remove,
    Os,
    Hash,
    Compress,
    Decompress,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Up => "up",
            CommandKind::Exit => "exit",
            CommandKind::List => "list",
            CommandKind::Cd => "change-directory",
            CommandKind::Cat => "read",
            CommandKind::Add => "create",
            CommandKind::Rename => "rename",
            CommandKind::Copy => "copy",
            CommandKind::Move => "move",
            CommandKind::Remove => "delete",
            CommandKind::Os => "os-info",
            CommandKind::Hash => "hash",
            CommandKind::Compress => "compress",
            CommandKind::Decompress => "decompress",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    None,
    Fixed(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub kind: CommandKind,
    pub tokens: &'static [&'static str],
    pub arity: Arity,
    pub usage: &'static str,
}

/// Built-in commands in dispatch priority order.
pub static COMMANDS: [CommandSpec; 14] = [
    CommandSpec {
        kind: CommandKind::Up,
        tokens: &["up"],
        arity: Arity::None,
        usage: "up",
    },
    CommandSpec {
        kind: CommandKind::Exit,
        tokens: &[".exit"],
        arity: Arity::None,
        usage: ".exit",
    },
    CommandSpec {
        kind: CommandKind::List,
        tokens: &["ls"],
        arity: Arity::None,
        usage: "ls",
    },
    CommandSpec {
        kind: CommandKind::Cd,
        tokens: &["cd"],
        arity: Arity::Fixed(1),
        usage: "cd <path>",
    },
    CommandSpec {
        kind: CommandKind::Cat,
        tokens: &["cat"],
        arity: Arity::Fixed(1),
        usage: "cat <path>",
    },
    CommandSpec {
        kind: CommandKind::Add,
        tokens: &["add"],
        arity: Arity::Fixed(1),
        usage: "add <name>",
    },
    CommandSpec {
        kind: CommandKind::Rename,
        tokens: &["rn"],
        arity: Arity::Fixed(2),
        usage: "rn <old name> <new name>",
    },
    CommandSpec {
        kind: CommandKind::Copy,
        tokens: &["cp"],
        arity: Arity::Fixed(2),
        usage: "cp <source> <destination>",
    },
    CommandSpec {
        kind: CommandKind::Move,
        tokens: &["mv"],
        arity: Arity::Fixed(2),
        usage: "mv <source> <destination>",
    },
    CommandSpec {
        kind: CommandKind::Remove,
        tokens: &["rm"],
        arity: Arity::Fixed(1),
        usage: "rm <path>",
    },
    CommandSpec {
        kind: CommandKind::Os,
        tokens: &["os"],
        arity: Arity::Fixed(1),
        usage: "os --EOL|--cpus|--homedir|--username|--architecture",
    },
    CommandSpec {
        kind: CommandKind::Hash,
        tokens: &["hash"],
        arity: Arity::Fixed(1),
        usage: "hash <path>",
    },
    CommandSpec {
        kind: CommandKind::Compress,
        tokens: &["compress"],
        arity: Arity::Fixed(2),
        usage: "compress <source> <destination>",
    },
    CommandSpec {
        kind: CommandKind::Decompress,
        tokens: &["decompress"],
        arity: Arity::Fixed(2),
        usage: "decompress <source> <destination>",
    },
];

#[derive(Debug)]
pub enum AliasError {
    InvalidToken(String),
    TokenTaken(String),
    UnknownTarget(String),
}

impl fmt::Display for AliasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasError::InvalidToken(token) => write!(f, "invalid alias token: {:?}", token),
            AliasError::TokenTaken(token) => write!(f, "token already in use: {}", token),
            AliasError::UnknownTarget(target) => write!(f, "no command with token: {}", target),
        }
    }
}

impl std::error::Error for AliasError {}

/// The built-in table plus any alias tokens registered at startup.
#[derive(Debug, Clone)]
pub struct CommandTable {
    aliases: Vec<(String, CommandKind)>,
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandTable {
    pub fn new() -> Self {
        Self {
            aliases: Vec::new(),
        }
    }

    pub fn specs(&self) -> impl Iterator<Item = &'static CommandSpec> {
        COMMANDS.iter()
    }

    pub fn spec(&self, kind: CommandKind) -> Option<&'static CommandSpec> {
        COMMANDS.iter().find(|spec| spec.kind == kind)
    }

    /// Built-in tokens of `kind` followed by its aliases.
    pub fn tokens(&self, kind: CommandKind) -> Vec<&str> {
        let mut tokens: Vec<&str> = self
            .spec(kind)
            .map(|spec| spec.tokens.to_vec())
            .unwrap_or_default();
        tokens.extend(
            self.aliases
                .iter()
                .filter(|(_, target)| *target == kind)
                .map(|(token, _)| token.as_str()),
        );
        tokens
    }

    pub fn all_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = COMMANDS
            .iter()
            .flat_map(|spec| spec.tokens.iter().copied())
            .collect();
        tokens.extend(self.aliases.iter().map(|(token, _)| token.as_str()));
        tokens
    }

    pub fn lookup(&self, token: &str) -> Option<CommandKind> {
        COMMANDS
            .iter()
            .find(|spec| spec.tokens.contains(&token))
            .map(|spec| spec.kind)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| alias == token)
                    .map(|(_, kind)| *kind)
            })
    }

    pub fn aliases(&self) -> &[(String, CommandKind)] {
        &self.aliases
    }

    /// Registers `token` as another spelling of the command named by `target`.
    pub fn add_alias(&mut self, token: &str, target: &str) -> Result<CommandKind, AliasError> {
        if token.is_empty() || token.chars().any(char::is_whitespace) {
            return Err(AliasError::InvalidToken(token.to_string()));
        }
        if self.lookup(token).is_some() {
            return Err(AliasError::TokenTaken(token.to_string()));
        }
        let kind = self
            .lookup(target)
            .ok_or_else(|| AliasError::UnknownTarget(target.to_string()))?;
        self.aliases.push((token.to_string(), kind));
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_tokens_are_unique() {
        let table = CommandTable::new();
        let tokens = table.all_tokens();
        let unique: HashSet<&str> = tokens.iter().copied().collect();
        assert_eq!(tokens.len(), unique.len());
    }

    #[test]
    fn test_priority_order() {
        let order: Vec<CommandKind> = COMMANDS.iter().map(|spec| spec.kind).collect();
        assert_eq!(order.first(), Some(&CommandKind::Up));
        assert_eq!(order.get(1), Some(&CommandKind::Exit));
        assert_eq!(order.last(), Some(&CommandKind::Decompress));
    }

    #[test]
    fn test_alias_extends_tokens() {
        let mut table = CommandTable::new();
        assert_eq!(table.add_alias("dir", "ls").ok(), Some(CommandKind::List));
        assert_eq!(table.tokens(CommandKind::List), vec!["ls", "dir"]);
        assert_eq!(table.lookup("dir"), Some(CommandKind::List));
    }

    #[test]
    fn test_alias_cannot_shadow() {
        let mut table = CommandTable::new();
        assert!(matches!(
            table.add_alias("cd", "ls"),
            Err(AliasError::TokenTaken(_))
        ));
        assert!(matches!(
            table.add_alias("two words", "ls"),
            Err(AliasError::InvalidToken(_))
        ));
        assert!(matches!(
            table.add_alias("x", "nope"),
            Err(AliasError::UnknownTarget(_))
        ));
        assert!(table.aliases().is_empty());
    }

    #[test]
    fn test_alias_of_alias_resolves_to_command() {
        let mut table = CommandTable::new();
        table.add_alias("type", "cat").ok();
        assert_eq!(table.add_alias("show", "type").ok(), Some(CommandKind::Cat));
    }
}
