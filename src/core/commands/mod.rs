use std::collections::BTreeMap;
use std::io::Write;

mod archive;
mod builtin;
mod cd;
mod digest;
mod files;
mod list;
mod os;
pub mod parser;
pub mod table;

pub use archive::{CompressCommand, DecompressCommand};
pub use builtin::ExitCommand;
pub use cd::{CdCommand, UpCommand};
pub use digest::HashCommand;
pub use files::{AddCommand, CatCommand, CopyCommand, MoveCommand, RemoveCommand, RenameCommand};
pub use list::ListCommand;
pub use os::OsCommand;
pub use parser::{matches_command, matches_exact, split_arguments, ParsedInput};
pub use table::{AliasError, Arity, CommandKind, CommandSpec, CommandTable, COMMANDS};

use crate::core::env::EnvError;
use crate::core::fs::{FileManager, FsError};

#[derive(Debug)]
pub enum CommandError {
    InvalidInput(String),
    MissingArgument {
        command: CommandKind,
        name: &'static str,
    },
    Fs(FsError),
    Env(EnvError),
    Output(std::io::Error),
}

impl CommandError {
    /// Whether the user sees "Invalid input!" rather than "Operation failed!".
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CommandError::InvalidInput(_))
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidInput(input) => write!(f, "invalid input: {:?}", input),
            CommandError::MissingArgument { command, name } => {
                write!(f, "{}: missing argument <{}>", command, name)
            }
            CommandError::Fs(err) => write!(f, "filesystem error: {}", err),
            CommandError::Env(err) => write!(f, "environment error: {}", err),
            CommandError::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<FsError> for CommandError {
    fn from(err: FsError) -> Self {
        CommandError::Fs(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::UnknownParameter(key) => CommandError::InvalidInput(key),
            other => CommandError::Env(other),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::Output(err)
    }
}

/// What a successful command asks the session to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success { message: Option<&'static str> },
    Exit,
}

impl Outcome {
    pub const fn done() -> Self {
        Outcome::Success { message: None }
    }

    pub const fn with_message(message: &'static str) -> Self {
        Outcome::Success {
            message: Some(message),
        }
    }
}

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    pub files: &'a mut FileManager,
    pub out: &'a mut dyn Write,
}

pub trait Command {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError>;
}

pub(crate) fn required<'a>(
    args: &'a [String],
    index: usize,
    command: CommandKind,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument { command, name })
}

#[derive(Clone)]
enum CommandType {
    Up(UpCommand),
    Exit(ExitCommand),
    List(ListCommand),
    Cd(CdCommand),
    Cat(CatCommand),
    Add(AddCommand),
    Rename(RenameCommand),
    Copy(CopyCommand),
    Move(MoveCommand),
    Remove(RemoveCommand),
    Os(OsCommand),
    Hash(HashCommand),
    Compress(CompressCommand),
    Decompress(DecompressCommand),
}

impl From<CommandKind> for CommandType {
    fn from(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Up => CommandType::Up(UpCommand),
            CommandKind::Exit => CommandType::Exit(ExitCommand),
            CommandKind::List => CommandType::List(ListCommand),
            CommandKind::Cd => CommandType::Cd(CdCommand),
            CommandKind::Cat => CommandType::Cat(CatCommand),
            CommandKind::Add => CommandType::Add(AddCommand),
            CommandKind::Rename => CommandType::Rename(RenameCommand),
            CommandKind::Copy => CommandType::Copy(CopyCommand),
            CommandKind::Move => CommandType::Move(MoveCommand),
            CommandKind::Remove => CommandType::Remove(RemoveCommand),
            CommandKind::Os => CommandType::Os(OsCommand),
            CommandKind::Hash => CommandType::Hash(HashCommand),
            CommandKind::Compress => CommandType::Compress(CompressCommand),
            CommandKind::Decompress => CommandType::Decompress(DecompressCommand),
        }
    }
}

impl Command for CommandType {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Up(cmd) => cmd.execute(ctx, args),
            CommandType::Exit(cmd) => cmd.execute(ctx, args),
            CommandType::List(cmd) => cmd.execute(ctx, args),
            CommandType::Cd(cmd) => cmd.execute(ctx, args),
            CommandType::Cat(cmd) => cmd.execute(ctx, args),
            CommandType::Add(cmd) => cmd.execute(ctx, args),
            CommandType::Rename(cmd) => cmd.execute(ctx, args),
            CommandType::Copy(cmd) => cmd.execute(ctx, args),
            CommandType::Move(cmd) => cmd.execute(ctx, args),
            CommandType::Remove(cmd) => cmd.execute(ctx, args),
            CommandType::Os(cmd) => cmd.execute(ctx, args),
            CommandType::Hash(cmd) => cmd.execute(ctx, args),
            CommandType::Compress(cmd) => cmd.execute(ctx, args),
            CommandType::Decompress(cmd) => cmd.execute(ctx, args),
        }
    }
}

/// Routes input lines to commands in table priority order.
#[derive(Clone)]
pub struct CommandExecutor {
    table: CommandTable,
    commands: BTreeMap<CommandKind, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(CommandTable::new())
    }
}

impl CommandExecutor {
    pub fn new(table: CommandTable) -> Self {
        let commands = table
            .specs()
            .map(|spec| (spec.kind, CommandType::from(spec.kind)))
            .collect();
        Self { table, commands }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Finds the first command whose tokens match `line`.
    pub fn resolve(&self, line: &str) -> Option<&'static CommandSpec> {
        let line = line.trim_start();
        self.table.specs().find(|spec| {
            let tokens = self.table.tokens(spec.kind);
            match spec.arity {
                Arity::None => matches_exact(line, &tokens),
                Arity::Fixed(_) => matches_command(line, &tokens),
            }
        })
    }

    pub fn execute(
        &self,
        line: &str,
        files: &mut FileManager,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        if !files.is_ready() {
            return Err(CommandError::Fs(FsError::NotStarted));
        }
        let spec = self
            .resolve(line)
            .ok_or_else(|| CommandError::InvalidInput(line.trim().to_string()))?;
        let args = match spec.arity {
            Arity::None => Vec::new(),
            Arity::Fixed(_) => split_arguments(line),
        };
        let command = self
            .commands
            .get(&spec.kind)
            .ok_or_else(|| CommandError::InvalidInput(line.trim().to_string()))?;

        tracing::debug!(command = %spec.kind, ?args, "dispatching");
        let mut ctx = CommandContext { files, out };
        command.execute(&mut ctx, &args)
    }
}
