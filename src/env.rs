use std::env as stdenv;
use std::path::PathBuf;

/// Interpreter-visible view of mutable process state.
///
/// The working directory is the only state a command mutates in-process; it
/// is process-wide and inherited by every child spawned afterwards. `cd`
/// keeps this mirror in sync with the real process working directory.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The current working directory for command execution.
    pub current_dir: PathBuf,
}

impl Environment {
    /// Capture the current process state into a new `Environment` instance.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self { current_dir }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
