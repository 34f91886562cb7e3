//! `mk`: the Monkey interpreter command line.

use std::process::ExitCode;

use mkc::commands::{eval_source, lex_file, parse_file, run_file, start_repl, EXIT_USAGE};

fn main() -> ExitCode {
    mkc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        return start_repl();
    };

    match command.as_str() {
        "repl" => start_repl(),
        "run" => with_argument(&args, "run <file.mk>", run_file),
        "eval" => with_argument(&args, "eval <source>", eval_source),
        "lex" => with_argument(&args, "lex <file.mk>", lex_file),
        "parse" => with_argument(&args, "parse <file.mk>", parse_file),
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        other => {
            eprintln!("unknown command: {other}");
            eprintln!();
            print_usage();
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Run `handler` on the command's single argument, or print its usage line.
fn with_argument(args: &[String], usage: &str, handler: fn(&str) -> ExitCode) -> ExitCode {
    match args.get(2) {
        Some(arg) => handler(arg),
        None => {
            eprintln!("Usage: mk {usage}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: mk [command] [args]");
    println!();
    println!("Commands:");
    println!("  repl              Start the interactive prompt (default)");
    println!("  run <file>        Run a source file");
    println!("  eval <source>     Evaluate source text and print its value");
    println!("  lex <file>        Show the token stream of a file");
    println!("  parse <file>      Show the parsed program of a file");
    println!("  help              Show this message");
    println!();
    println!("Set MK_LOG (or RUST_LOG) to enable tracing, e.g. MK_LOG=mk_eval=debug");
}
