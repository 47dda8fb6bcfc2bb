//! Ctrl-C coordination between the signal thread and the running command.
//!
//! While a command runs, the handler only raises a flag; every file read
//! checks it, so the command unwinds and drops its unfinished output before
//! the session says goodbye.

use std::io::{self, Read};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const IDLE: u8 = 0;
const BUSY: u8 = 1;
const INTERRUPTED: u8 = 2;
const EXITING: u8 = 3;

#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    state: Arc<AtomicU8>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called from the Ctrl-C handler. Returns `true` when a running command
    /// will stop and finish the session itself; `false` means nothing is
    /// running and the caller should exit.
    pub fn trigger(&self) -> bool {
        if self
            .state
            .compare_exchange(BUSY, INTERRUPTED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return true;
        }
        self.state.store(EXITING, Ordering::SeqCst);
        false
    }

    pub fn is_triggered(&self) -> bool {
        self.state.load(Ordering::SeqCst) >= INTERRUPTED
    }

    /// Marks a command as running. `false` once the process is shutting down.
    pub fn begin(&self) -> bool {
        self.state
            .compare_exchange(IDLE, BUSY, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Marks the command as done and reports whether Ctrl-C arrived meanwhile.
    pub fn finish(&self) -> bool {
        self.state
            .compare_exchange(BUSY, IDLE, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
    }

    pub fn guard<R: Read>(&self, inner: R) -> Guarded<R> {
        Guarded {
            inner,
            interrupt: self.clone(),
        }
    }
}

/// A reader that fails as soon as Ctrl-C has been pressed.
pub struct Guarded<R> {
    inner: R,
    interrupt: Interrupt,
}

impl<R: Read> Read for Guarded<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt.is_triggered() {
            return Err(io::Error::other("interrupted by Ctrl-C"));
        }
        self.inner.read(buf)
    }
}
