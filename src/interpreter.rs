use crate::PROGRAM_TAG;
use crate::builtin::{Cd, Exit, Help};
use crate::command::{CommandFactory, Continuation};
use crate::env::Environment;
use crate::external::ExternalCommand;
use crate::lexer::split_into_tokens;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Prompt written before each read.
const PROMPT: &str = "~ ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate — BuiltinCommand and
/// ExternalCommand.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A minimal shell-like interpreter.
///
/// The interpreter maintains an [`Environment`] and an ordered list of
/// [`CommandFactory`] objects that are queried to create commands by name;
/// the first factory to recognize a name wins. See [`Default`] for the
/// registry included out of the box.
///
/// Example
/// ```
/// use mysh::Interpreter;
/// use mysh::command::Continuation;
///
/// let mut sh = Interpreter::default();
/// assert_eq!(sh.dispatch(&["exit".to_string()]), Continuation::Terminate);
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(),
            commands,
        }
    }

    /// Dispatch one argument vector and report how the loop should proceed.
    ///
    /// An empty vector means "no command entered" and is a side-effect-free
    /// `Continue`. Otherwise the first token selects a command through the
    /// factory list; a failure from the command is reported to stderr here
    /// and mapped to `Continue`, so nothing short of allocation exhaustion
    /// ends the shell from this path.
    pub fn dispatch(&mut self, args: &[String]) -> Continuation {
        let Some((name, rest)) = args.split_first() else {
            return Continuation::Continue;
        };
        let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
        match self.run(name, &rest) {
            Ok(next) => next,
            Err(err) => {
                eprintln!("{PROGRAM_TAG}: {err:#}");
                Continuation::Continue
            }
        }
    }

    /// Run a single command invocation by name with arguments.
    ///
    /// Factories are consulted in registration order and the first match
    /// wins. With the default registry the external launcher accepts every
    /// name, so the not-found error below is only reachable from custom
    /// registries.
    pub fn run(&mut self, name: &str, args: &[&str]) -> Result<Continuation> {
        let mut stdout = std::io::stdout();
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&self.env, name, args) {
                return cmd.execute(&mut stdout, &mut self.env);
            }
        }
        anyhow::bail!("command not found: {name}")
    }

    /// The interactive read-eval loop.
    ///
    /// Prompts, reads one line, tokenizes and dispatches it, and stops when
    /// a dispatch answers `Terminate`. End of input behaves exactly like
    /// `exit`; an interrupt at the prompt discards the pending line and
    /// prompts again. The line buffer and argument vector are per-iteration
    /// locals and are released on every path before the next read.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    let args = split_into_tokens(&line);
                    if !self.dispatch(&args).keep_running() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Registry in first-match order: `cd`, `help`, `exit`, then the
    /// external launcher as a catch-all.
    fn default() -> Self {
        Self::new(vec![
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Help>::default()),
            Box::new(Factory::<Exit>::default()),
            Box::new(Factory::<ExternalCommand>::default()),
        ])
    }
}
