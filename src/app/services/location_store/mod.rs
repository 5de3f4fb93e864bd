//! Location store: the sole authority over stored location records
//!
//! All mutation is upsert-by-id. Two implementations share one set of
//! collection rules (see [`collection`]):
//! - [`JsonFileStore`] persists the whole collection as one JSON document under
//!   the well-known storage key and rewrites it atomically on every mutation
//! - [`InMemoryStore`] keeps the collection in memory, for tests and dry runs
//!
//! Stores are passed explicitly (`&mut dyn LocationStore`) to whatever needs
//! them; there is no process-wide instance.

use crate::Result;
use crate::app::models::{DoorStatus, LocationEntry};

pub mod collection;
pub mod json_file;
pub mod memory;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use query::{LocationQuery, StatusSummary};

/// Capability to list, read and mutate stored locations
pub trait LocationStore {
    /// Every stored entry, in no guaranteed order
    fn list_all(&self) -> Vec<LocationEntry>;

    /// Look up an entry by exact id
    fn get_by_id(&self, id: &str) -> Option<LocationEntry> {
        self.list_all().into_iter().find(|entry| entry.id == id)
    }

    /// Replace the entry with the same id, or append it
    ///
    /// Timestamps are taken as given. The entry is validated first and
    /// nothing is written if validation fails.
    fn upsert(&mut self, entry: LocationEntry) -> Result<()>;

    /// Set the door status and refresh `updated_at`
    ///
    /// Returns `Ok(false)` without writing anything when the id is unknown.
    fn update_status(&mut self, id: &str, status: DoorStatus) -> Result<bool>;

    /// Remove the entry with this id
    ///
    /// Returns `Ok(false)` without writing anything when the id is unknown.
    fn delete(&mut self, id: &str) -> Result<bool>;

    /// Number of stored entries
    fn count(&self) -> usize {
        self.list_all().len()
    }
}
