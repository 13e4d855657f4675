use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Outcome of dispatching one argument vector.
///
/// Every dispatch produces one of these and the read-eval loop consumes it
/// immediately: `Continue` means prompt and read again, `Terminate` means
/// stop the loop and let the process exit successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Keep the interactive loop running.
    Continue,
    /// Stop the interactive loop.
    Terminate,
}

impl Continuation {
    /// True while the interactive loop should keep running.
    pub fn keep_running(self) -> bool {
        matches!(self, Continuation::Continue)
    }
}

/// Object-safe trait for anything the dispatcher can run.
///
/// Implemented by built-ins via a blanket impl and by the external-program
/// launcher. A returned error is reported by the dispatcher and never stops
/// the loop.
pub trait ExecutableCommand {
    /// Executes the command.
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Continuation>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`; the
/// dispatcher then asks the next factory in registration order. Name
/// comparison is a case-sensitive exact match.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(
        &self,
        env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}
