use super::{required, Command, CommandContext, CommandError, CommandKind, Outcome};

#[derive(Clone)]
pub struct CompressCommand;

impl Command for CompressCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let source = required(args, 0, CommandKind::Compress, "source")?;
        let destination = required(args, 1, CommandKind::Compress, "destination")?;
        ctx.files.compress(source, destination)?;
        Ok(Outcome::with_message("File compressed!"))
    }
}

#[derive(Clone)]
pub struct DecompressCommand;

impl Command for DecompressCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let source = required(args, 0, CommandKind::Decompress, "source")?;
        let destination = required(args, 1, CommandKind::Decompress, "destination")?;
        ctx.files.decompress(source, destination)?;
        Ok(Outcome::with_message("File decompressed!"))
    }
}
