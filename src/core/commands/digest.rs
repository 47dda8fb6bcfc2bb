use std::io::Write;

use super::{required, Command, CommandContext, CommandError, CommandKind, Outcome};

/// Prints the SHA-256 of a file as lowercase hex.
#[derive(Clone)]
pub struct HashCommand;

impl Command for HashCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = required(args, 0, CommandKind::Hash, "path")?;
        let digest = ctx.files.hash(path)?;
        writeln!(ctx.out, "{}", digest)?;
        Ok(Outcome::done())
    }
}
