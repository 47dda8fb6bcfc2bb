use super::{Command, CommandContext, CommandError, Outcome};

#[derive(Clone)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit)
    }
}
