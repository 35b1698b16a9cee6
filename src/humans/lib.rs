//! # Humans Architecture
//!
//! Humans keeps a small register of people (surname, name, zodiac sign,
//! birth date) in a JSON file. The crate is a library with a thin CLI on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the table, prints messages     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, display, select                                     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: load / save the whole list              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`.
//!
//! ## Data file
//!
//! The path comes from `--data`, then `HUMANS_DATA`, then a `.env` file next
//! to the executable (see [`config`]). The file is read once per invocation
//! and rewritten only by `add`. Concurrent invocations are not coordinated:
//! the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: add, display and select
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Human` and `DisplayHuman`
//! - [`config`]: Data file path resolution
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
