//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It does no printing and holds no business logic.
//!
//! `HumansApi<S: DataStore>` is generic over the storage backend:
//! - Production: `HumansApi<FileStore>`
//! - Testing: `HumansApi<InMemoryStore>`
//!
//! Each call loads the store once. Only [`HumansApi::add_human`] writes it back.

use crate::commands;
use crate::error::Result;
use crate::model::Human;
use crate::store::DataStore;

pub struct HumansApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> HumansApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_human(&mut self, human: Human) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, human)
    }

    pub fn display_humans(&self) -> Result<commands::CmdResult> {
        commands::display::run(&self.store)
    }

    pub fn select_humans(&self, zodiac: &str) -> Result<commands::CmdResult> {
        commands::select::run(&self.store, zodiac)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
