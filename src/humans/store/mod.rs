//! # Storage Layer
//!
//! The register is a single ordered list of [`Human`] records. The
//! [`DataStore`] trait loads and saves that list as a whole; there are no
//! partial updates.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a JSON file holding an array of records
//!   - A missing file reads as an empty list
//!   - Saving rewrites the whole file (temp file + rename)
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - Counts saves so callers can assert on write behaviour
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "surname": "Ivanov",
//!         "name": "Ivan",
//!         "zodiak": "Leo",
//!         "date": "1990-01-01"
//!     }
//! ]
//! ```
//!
//! Four-space indentation, non-ASCII text written as-is.

use crate::error::Result;
use crate::model::Human;

pub mod fs;
pub mod memory;

/// Whole-list persistence for the register.
pub trait DataStore {
    /// Load every record, in stored order. An absent store is empty.
    fn load(&self) -> Result<Vec<Human>>;

    /// Replace the stored list with `humans`.
    fn save(&mut self, humans: &[Human]) -> Result<()>;
}
