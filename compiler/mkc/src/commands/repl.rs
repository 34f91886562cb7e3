//! Interactive read-eval-print loop.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use mk_eval::{Environment, Interpreter};

use super::EXIT_USAGE;
use crate::run_source;

pub const PROMPT: &str = ">> ";

/// Read lines from `input` until end of input, evaluating each one in a
/// single persistent environment and writing results to `output`.
///
/// Errors do not end the session; the next line runs against whatever
/// bindings succeeded so far.
pub fn repl<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    interpreter: &Interpreter,
) -> io::Result<()> {
    let env = Environment::new();
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        if let Some(text) = run_source(&line, interpreter, &env).render() {
            writeln!(output, "{text}")?;
        }
    }
}

/// Run the REPL on stdin and stdout.
pub fn start_repl() -> ExitCode {
    println!("Hello! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match repl(stdin.lock(), &mut stdout, &Interpreter::new()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}
