//! # CLI Behavior
//!
//! This is the terminal client for the humans library. It is the only place
//! that knows about terminal I/O, exit codes and output formatting.
//!
//! ### Naked Execution (`humans`)
//!
//! Running `humans` with no subcommand behaves like `humans display`.
//!
//! ### Data file
//!
//! `--data` is global, so `humans --data people.json display` and
//! `humans display --data people.json` are the same. Without it the path
//! comes from `HUMANS_DATA` or a `.env` file beside the executable. When
//! nothing resolves the CLI fails before touching any file.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `render`: The fixed-width table and message printing
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
