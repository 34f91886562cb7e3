//! Parser tests.
//!
//! - `statements`: `let`, `return`, and expression statements
//! - `expressions`: literals, operators, precedence, and compound forms
//! - `errors`: error messages and recovery


use mk_ir::Program;

use crate::parse;

/// Parse `source`, failing the test on any parse error.
fn parse_ok(source: &str) -> Program {
    let result = parse(source);
    assert!(
        !result.has_errors(),
        "unexpected parse errors for {source:?}: {:?}",
        result.errors
    );
    result.program
}

/// Error messages produced for `source`.
fn error_messages(source: &str) -> Vec<String> {
    parse(source).errors.iter().map(|e| e.message()).collect()
}
