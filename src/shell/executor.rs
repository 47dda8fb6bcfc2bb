use std::io;
use std::time::Instant;

use crate::core::session::Flow;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str) -> Result<Flow, ShellError> {
        let start_time = Instant::now();
        // unlocked, so the Ctrl-C handler can still reach stdout
        let flow = self.session.handle_line(line, &mut io::stdout())?;
        tracing::trace!(
            line,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "line handled"
        );

        self.sync_completer();
        Ok(flow)
    }
}
