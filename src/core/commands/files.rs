use std::io::Write;

use super::{required, Command, CommandContext, CommandError, CommandKind, Outcome};

#[derive(Clone)]
pub struct CatCommand;

impl Command for CatCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = required(args, 0, CommandKind::Cat, "path")?;
        ctx.files.read_to(path, ctx.out)?;
        // content, then an empty line before the location
        writeln!(ctx.out, "\n")?;
        Ok(Outcome::done())
    }
}

#[derive(Clone)]
pub struct AddCommand;

impl Command for AddCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let name = required(args, 0, CommandKind::Add, "name")?;
        ctx.files.create_empty(name)?;
        Ok(Outcome::with_message("File created!"))
    }
}

#[derive(Clone)]
pub struct RenameCommand;

impl Command for RenameCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let old_name = required(args, 0, CommandKind::Rename, "old name")?;
        let new_name = required(args, 1, CommandKind::Rename, "new name")?;
        ctx.files.rename(old_name, new_name)?;
        Ok(Outcome::with_message("File renamed!"))
    }
}

#[derive(Clone)]
pub struct CopyCommand;

impl Command for CopyCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let source = required(args, 0, CommandKind::Copy, "source")?;
        let destination = required(args, 1, CommandKind::Copy, "destination")?;
        ctx.files.copy(source, destination)?;
        Ok(Outcome::with_message("File copied!"))
    }
}

#[derive(Clone)]
pub struct MoveCommand;

impl Command for MoveCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let source = required(args, 0, CommandKind::Move, "source")?;
        let destination = required(args, 1, CommandKind::Move, "destination")?;
        ctx.files.relocate(source, destination)?;
        Ok(Outcome::with_message("File moved!"))
    }
}

#[derive(Clone)]
pub struct RemoveCommand;

impl Command for RemoveCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let path = required(args, 0, CommandKind::Remove, "path")?;
        ctx.files.remove(path)?;
        Ok(Outcome::with_message("File deleted!"))
    }
}
