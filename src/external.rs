use crate::PROGRAM_TAG;
use crate::command::{CommandFactory, Continuation, ExecutableCommand};
use crate::env::Environment;
use crate::interpreter::Factory;
use anyhow::{Context, Result};
use nix::errno::Errno;
use nix::libc;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, execvp, fork};
use std::ffi::CString;
use std::io::Write;

/// Command that is not a builtin.
///
/// The full argument vector is carried verbatim; the first element names the
/// program and is resolved by `execvp` in the child using the host's PATH
/// rules, so "not found" is only discovered after the fork.
pub struct ExternalCommand {
    argv: Vec<String>,
}

impl ExternalCommand {
    pub(crate) fn new(name: &str, args: &[&str]) -> Self {
        let argv = std::iter::once(name)
            .chain(args.iter().copied())
            .map(str::to_owned)
            .collect();
        Self { argv }
    }

    fn c_argv(&self) -> Result<Vec<CString>> {
        self.argv
            .iter()
            .map(|arg| {
                CString::new(arg.as_str()).with_context(|| {
                    format!("{}: argument contains an interior NUL byte", self.argv[0])
                })
            })
            .collect()
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    /// Terminal fallback: accepts every name not claimed by an earlier factory.
    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        Some(Box::new(ExternalCommand::new(name, args)))
    }
}

impl ExecutableCommand for ExternalCommand {
    /// Forks off a child, replaces its image with the named program, and
    /// blocks until the child reaches a terminal disposition.
    ///
    /// Always resolves to `Continue`: exec failure is confined to the child,
    /// which reports it and exits with a failure status, and a fork failure
    /// is reported by the dispatcher without any wait. The child's exit code
    /// is never inspected for control flow, only for diagnostics.
    fn execute(
        self: Box<Self>,
        _stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Continuation> {
        let argv = self.c_argv()?;

        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                // Only reached when exec fails; stderr is inherited, so the
                // report lands on the user's terminal.
                if let Err(err) = execvp(&argv[0], &argv) {
                    eprintln!("{PROGRAM_TAG}: {}: {}", self.argv[0], err.desc());
                }
                unsafe { libc::_exit(libc::EXIT_FAILURE) }
            }
            Ok(ForkResult::Parent { child, .. }) => {
                if let WaitStatus::Signaled(_, signal, _) = await_termination(child)? {
                    eprintln!("{PROGRAM_TAG}: {}: terminated by {:?}", self.argv[0], signal);
                }
                Ok(Continuation::Continue)
            }
            Err(err) => Err(err).with_context(|| format!("{}: fork failed", self.argv[0])),
        }
    }
}

/// Blocks until `child` reaches a terminal disposition and returns it.
///
/// A stop notification (the child was suspended) is not terminal and the
/// wait repeats, as does a wait interrupted by a signal. Once this returns,
/// the child has been reaped and its pid must not be waited on again.
fn await_termination(child: Pid) -> Result<WaitStatus> {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(status @ (WaitStatus::Exited(..) | WaitStatus::Signaled(..))) => return Ok(status),
            Ok(_) => continue,
            Err(Errno::EINTR) => continue,
            Err(err) => return Err(err).with_context(|| format!("waitpid({child})")),
        }
    }
}
