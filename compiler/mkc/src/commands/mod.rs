//! Command handlers for the `mk` binary.
//!
//! Each submodule implements one command. Handlers return the process exit
//! code; shared helpers live here.

mod debug;
mod repl;
mod run;

use std::process::ExitCode;

pub use debug::{lex_file, parse_file};
pub use repl::{repl, start_repl, PROMPT};
pub use run::{eval_source, run_file};

/// Parse or evaluation failure.
pub const EXIT_FAILURE: u8 = 1;
/// Bad arguments or unreadable input.
pub const EXIT_USAGE: u8 = 2;

/// Read a file, turning IO errors into a user-facing message.
pub fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Read `path` or report why not.
fn read_or_report(path: &str) -> Result<String, ExitCode> {
    read_file(path).map_err(|msg| {
        eprintln!("{msg}");
        ExitCode::from(EXIT_USAGE)
    })
}
