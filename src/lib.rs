//! A tiny interactive shell.
//!
//! This crate provides the building blocks of a minimal command interpreter:
//! a line is read from the user, split into an argument vector, and either
//! handled by a built-in command running in-process or handed to a forked
//! child that replaces itself with the named program. The parent waits for
//! the child to finish before prompting again.
//!
//! The main entry point is [`Interpreter`], which owns the command registry
//! and the read-eval loop. The public modules [`command`] and [`env`] expose
//! the traits and types needed to implement your own commands.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
mod lexer;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;

/// Fixed tag prefixed to every diagnostic the shell writes to stderr.
pub(crate) const PROGRAM_TAG: &str = "mysh";
