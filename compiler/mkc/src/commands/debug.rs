//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use mk_ir::TokenKind;
use mk_lexer::Lexer;

use super::{read_or_report, EXIT_FAILURE};
use crate::render_parse_errors;

/// Print the token stream of a file, one token per line.
pub fn lex_file(path: &str) -> ExitCode {
    let source = match read_or_report(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let mut illegal = 0usize;
    for token in Lexer::new(&source) {
        if token.is(TokenKind::Illegal) {
            illegal += 1;
        }
        println!("  {token:?}");
    }

    if illegal > 0 {
        eprintln!("{illegal} illegal token(s) in '{path}'");
        ExitCode::from(EXIT_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}

/// Parse a file and print its canonical rendering, one statement per line.
pub fn parse_file(path: &str) -> ExitCode {
    let source = match read_or_report(path) {
        Ok(source) => source,
        Err(code) => return code,
    };

    let result = mk_parse::parse(&source);
    println!(
        "Parse result for '{path}': {} statement(s), {} error(s)",
        result.program.statements.len(),
        result.errors.len()
    );
    for stmt in &result.program.statements {
        println!("  {stmt}");
    }

    if result.has_errors() {
        eprintln!("{}", render_parse_errors(&result.errors));
        for error in &result.errors {
            eprintln!("  at {}", error.span);
        }
        ExitCode::from(EXIT_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}
