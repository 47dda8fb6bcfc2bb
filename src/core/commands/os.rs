use std::io::Write;

use super::{Command, CommandContext, CommandError, Outcome};
use crate::core::env::OsParam;

#[derive(Clone)]
pub struct OsCommand;

impl Command for OsCommand {
    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        // a missing key is treated like an unknown one
        let key = args
            .first()
            .ok_or_else(|| CommandError::InvalidInput(String::from("os")))?;
        let value = OsParam::from_key(key)?.value()?;
        writeln!(ctx.out, "{}", value)?;
        Ok(Outcome::done())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fs::FileManager;

    fn run(args: &[&str]) -> (Result<Outcome, CommandError>, String) {
        let temp = tempfile::tempdir().unwrap();
        let mut files = FileManager::new("tester", temp.path());
        let mut out = Vec::new();
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let result = OsCommand.execute(
            &mut CommandContext {
                files: &mut files,
                out: &mut out,
            },
            &args,
        );
        (result, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_architecture() {
        let (result, output) = run(&["--architecture"]);
        assert_eq!(result.ok(), Some(Outcome::done()));
        assert_eq!(output.trim(), std::env::consts::ARCH);
    }

    #[test]
    fn test_eol() {
        let (result, output) = run(&["--EOL", "ignored"]);
        assert!(result.is_ok());
        assert!(output.starts_with('"'));
    }

    #[test]
    fn test_unknown_key() {
        let (result, output) = run(&["--kernel"]);
        assert!(matches!(result, Err(CommandError::InvalidInput(_))));
        assert!(output.is_empty());
    }
}
