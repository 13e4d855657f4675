use anyhow::Result;
use mysh::Interpreter;

fn main() -> Result<()> {
    println!("Welcome to mysh. Enter \"help\" for basic information.");
    Interpreter::default().repl()
}
