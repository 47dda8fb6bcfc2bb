//! The read-dispatch-report loop. Every line ends with the current location
//! being shown again, whatever the command did.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::core::commands::{CommandError, CommandExecutor, Outcome};
use crate::core::fs::FileManager;
use crate::error::ShellError;
use crate::highlight::SyntaxHighlighter;

const INVALID_INPUT: &str = "Invalid input!";
const OPERATION_FAILED: &str = "Operation failed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session {
    files: FileManager,
    executor: CommandExecutor,
    highlighter: SyntaxHighlighter,
}

impl Session {
    pub fn new(files: FileManager, executor: CommandExecutor, highlighter: SyntaxHighlighter) -> Self {
        Self {
            files,
            executor,
            highlighter,
        }
    }

    pub fn farewell_message(username: &str) -> String {
        format!("Thank you for using File Manager, {}!", username)
    }

    pub fn current_dir(&self) -> &Path {
        self.files.current_dir()
    }

    pub fn username(&self) -> &str {
        self.files.username()
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Enters the home directory, then greets. Failing to enter home is fatal.
    pub fn start(&mut self, out: &mut dyn Write) -> Result<(), ShellError> {
        self.files.start()?;
        writeln!(out, "Welcome to the File Manager, {}!", self.username())?;
        self.show_location(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str, out: &mut dyn Write) -> io::Result<Flow> {
        let interrupt = self.files.interrupt();
        if !interrupt.begin() {
            // the Ctrl-C handler is already saying goodbye
            return Ok(Flow::Exit);
        }
        let result = self.executor.execute(line, &mut self.files, out);
        if interrupt.finish() {
            if let Err(err) = &result {
                tracing::debug!(error = %err, "command interrupted");
            }
            writeln!(out)?;
            self.farewell(out)?;
            return Ok(Flow::Exit);
        }
        let flow = self.report(result, out)?;
        out.flush()?;
        Ok(flow)
    }

    fn report(&self, result: Result<Outcome, CommandError>, out: &mut dyn Write) -> io::Result<Flow> {
        match result {
            Ok(Outcome::Exit) => {
                self.farewell(out)?;
                return Ok(Flow::Exit);
            }
            Ok(Outcome::Success { message }) => {
                if let Some(message) = message {
                    writeln!(out, "{}", self.highlighter.highlight_success(message))?;
                }
            }
            Err(err) if err.is_invalid_input() => {
                tracing::debug!(error = %err, "rejected input");
                writeln!(out, "{}", self.highlighter.highlight_error(INVALID_INPUT))?;
                writeln!(out)?;
            }
            Err(err) => {
                tracing::debug!(error = %err, "operation failed");
                writeln!(out, "{}", self.highlighter.highlight_error(OPERATION_FAILED))?;
                writeln!(out)?;
            }
        }
        self.show_location(out)?;
        Ok(Flow::Continue)
    }

    pub fn show_location(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "You are currently in {}", self.current_dir().display())?;
        writeln!(out)
    }

    pub fn farewell(&self, out: &mut dyn Write) -> io::Result<()> {
        tracing::info!("session finished");
        writeln!(out, "{}", Self::farewell_message(self.username()))?;
        out.flush()
    }

    /// Runs a whole session over `input`. End of input counts as `.exit`.
    /// Bytes that are not UTF-8 are replaced rather than ending the session.
    pub fn run<R: BufRead>(&mut self, mut input: R, out: &mut dyn Write) -> Result<(), ShellError> {
        self.start(out)?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            if self.handle_line(line, out)? == Flow::Exit {
                return Ok(());
            }
        }
        self.farewell(out)?;
        Ok(())
    }
}
