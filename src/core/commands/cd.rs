use super::{required, Command, CommandContext, CommandError, CommandKind, Outcome};

#[derive(Clone)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let target = required(args, 0, CommandKind::Cd, "path")?;
        ctx.files.change_dir(target)?;
        Ok(Outcome::done())
    }
}

#[derive(Clone)]
pub struct UpCommand;

impl Command for UpCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, _args: &[String]) -> Result<Outcome, CommandError> {
        ctx.files.go_up()?;
        Ok(Outcome::done())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fs::FileManager;
    use std::fs;

    #[test]
    fn test_cd_then_up() {
        let temp = tempfile::tempdir().unwrap();
        let mut files = FileManager::new("tester", temp.path());
        let start = files.start().unwrap().to_path_buf();
        fs::create_dir(start.join("sub")).unwrap();
        let mut out = Vec::new();

        let mut ctx = CommandContext {
            files: &mut files,
            out: &mut out,
        };
        assert!(CdCommand.execute(&mut ctx, &["sub".to_string()]).is_ok());
        assert_eq!(ctx.files.current_dir(), start.join("sub"));

        assert!(UpCommand.execute(&mut ctx, &[]).is_ok());
        assert_eq!(ctx.files.current_dir(), start);
    }

    #[test]
    fn test_cd_invalid() {
        let temp = tempfile::tempdir().unwrap();
        let mut files = FileManager::new("tester", temp.path());
        let start = files.start().unwrap().to_path_buf();
        let mut out = Vec::new();

        let mut ctx = CommandContext {
            files: &mut files,
            out: &mut out,
        };
        let result = CdCommand.execute(&mut ctx, &["nonexistent".to_string()]);
        assert!(matches!(result, Err(CommandError::Fs(_))));
        assert_eq!(ctx.files.current_dir(), start);
    }
}
