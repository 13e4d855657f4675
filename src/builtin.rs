use crate::command::{CommandFactory, Continuation, ExecutableCommand};
use crate::env::Environment;
use crate::interpreter::Factory;
use anyhow::{Context, Result};
use argh::{EarlyExit, FromArgs};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// directly in-process without spawning a child process.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cd".
    fn name() -> &'static str;

    /// Executes the command using the provided output stream and environment.
    ///
    /// A returned error is reported by the dispatcher; it never terminates
    /// the shell.
    fn execute(self, stdout: &mut dyn Write, env: &mut Environment) -> Result<Continuation>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<Continuation> {
        T::execute(*self, stdout, env)
    }
}

/// Fallback produced when argh rejects an invocation (or answers `--help`).
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<Continuation> {
        if self.is_error {
            anyhow::bail!("{}", self.output.trim_end());
        }
        writeln!(stdout, "{}", self.output.trim_end())?;
        Ok(Continuation::Continue)
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
/// With no target, moves to the parent of the current directory.
pub struct Cd {
    #[argh(positional, greedy)]
    /// target directory; only the first value is used, anything further is ignored.
    pub args: Vec<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn execute(self, _stdout: &mut dyn Write, env: &mut Environment) -> Result<Continuation> {
        let target = PathBuf::from(self.args.first().map_or("..", String::as_str));

        let new_dir = if target.is_absolute() {
            target
        } else {
            env.current_dir.join(target)
        };

        let canonical = fs::canonicalize(&new_dir)
            .with_context(|| format!("cd: {}", new_dir.display()))?;

        env::set_current_dir(&canonical)
            .with_context(|| format!("cd: can't chdir to {}", canonical.display()))?;
        env.current_dir = canonical;
        Ok(Continuation::Continue)
    }
}

#[derive(FromArgs)]
/// Print information about the shell and its built-in commands.
pub struct Help {
    #[argh(positional, greedy)]
    /// extra arguments are accepted and ignored.
    pub _args: Vec<String>,
}

const HELP_TEXT: &str = "\
mysh, a basic shell.
Type program names and arguments, then hit enter.
The following commands are built in:
  cd [dir]   change the working directory (parent directory when no dir is given)
  help       show this text
  exit       leave the shell
Anything else is run as an external program.
Use the \"man\" command with an argument for information on other programs.
";

impl BuiltinCommand for Help {
    fn name() -> &'static str {
        "help"
    }

    fn execute(self, stdout: &mut dyn Write, _env: &mut Environment) -> Result<Continuation> {
        write!(stdout, "{}", HELP_TEXT)?;
        Ok(Continuation::Continue)
    }
}

#[derive(FromArgs)]
/// Stop reading commands and leave the shell.
pub struct Exit {
    #[argh(positional, greedy)]
    /// trailing arguments are accepted and ignored.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self, _stdout: &mut dyn Write, _env: &mut Environment) -> Result<Continuation> {
        Ok(Continuation::Terminate)
    }
}
