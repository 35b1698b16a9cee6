//! # Humans CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! Any error that reaches this point is printed as `Error: <message>` on
//! stderr and the process exits with status 1. Usage errors never get here;
//! clap reports them itself.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
