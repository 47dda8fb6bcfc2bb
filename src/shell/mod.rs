use std::io;

use rustyline::{config::Configurer, error::ReadlineError, history::FileHistory, Editor};

mod executor;

use crate::{
    core::session::{Flow, Session},
    error::ShellError,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

use executor::CommandHandler;

/// Interactive front-end: a line editor with completion wrapped around a
/// [`Session`].
pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: Session,
    pub(crate) prompt: String,
}

impl Shell {
    pub fn new(
        session: Session,
        prompt: impl Into<String>,
        highlighter: SyntaxHighlighter,
    ) -> Result<Self, ShellError> {
        let completer = ShellCompleter::new(
            session.executor().table(),
            session.current_dir(),
            highlighter,
        );
        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;

        editor.set_helper(Some(completer));
        editor.set_auto_add_history(true);

        Ok(Shell {
            editor,
            session,
            prompt: prompt.into(),
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        self.session.start(&mut io::stdout())?;
        self.sync_completer();

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    if self.execute_command(&line)? == Flow::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    tracing::debug!("input closed");
                    self.session.farewell(&mut io::stdout())?;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    pub(crate) fn sync_completer(&mut self) {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_current_dir(self.session.current_dir());
        }
    }
}
