//! Where batched failure messages go.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Receives every message of one failed exec at once.
pub type ErrorSink = Box<dyn Fn(&[String])>;

/// Write an `Error:` block, one `  - message` line per entry.
pub fn write_errors<W: Write>(out: &mut W, messages: &[String]) -> io::Result<()> {
    writeln!(out, "Error:")?;
    for message in messages {
        writeln!(out, "  - {message}")?;
    }
    Ok(())
}

/// Sink writing to standard error.
pub fn stderr_sink() -> ErrorSink {
    Box::new(|messages| {
        if let Err(err) = write_errors(&mut io::stderr().lock(), messages) {
            tracing::warn!(%err, "failed to write errors");
        }
    })
}

/// Shared handle for adding failure messages to the next exec.
///
/// Validators, hooks and actions capture a clone from
/// [`crate::Program::reporter`]. Messages queued before or during an exec
/// fail that exec and are drained by it.
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    pending: Rc<RefCell<Vec<String>>>,
}

impl Reporter {
    pub fn error<I, S>(&self, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pending
            .borrow_mut()
            .extend(messages.into_iter().map(Into::into));
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    pub fn pending(&self) -> Vec<String> {
        self.pending.borrow().clone()
    }

    pub(crate) fn drain(&self) -> Vec<String> {
        self.pending.take()
    }
}
