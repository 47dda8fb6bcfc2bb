use std::io::Write;

use super::{Command, CommandContext, CommandError, Outcome};

#[derive(Clone)]
pub struct ListCommand;

impl Command for ListCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        for name in ctx.files.list()? {
            writeln!(ctx.out, "{}", name)?;
        }
        Ok(Outcome::done())
    }
}
