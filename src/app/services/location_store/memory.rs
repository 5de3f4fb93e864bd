//! In-memory location store

use super::LocationStore;
use super::collection::{remove_entry, set_door_status, upsert_entry};
use crate::Result;
use crate::app::models::{DoorStatus, LocationEntry};
use crate::app::services::providers::{Clock, SystemClock};
use std::sync::Arc;

/// Location store backed by a plain vector
///
/// Same semantics as [`super::JsonFileStore`] without touching the disk.
pub struct InMemoryStore {
    entries: Vec<LocationEntry>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    /// Create an empty store using the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty store whose status updates are stamped by `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Seed the store with existing entries (validated on the way in)
    pub fn with_entries(mut self, entries: Vec<LocationEntry>) -> Result<Self> {
        for entry in entries {
            upsert_entry(&mut self.entries, entry)?;
        }
        Ok(self)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl LocationStore for InMemoryStore {
    fn list_all(&self) -> Vec<LocationEntry> {
        self.entries.clone()
    }

    fn get_by_id(&self, id: &str) -> Option<LocationEntry> {
        self.entries.iter().find(|entry| entry.id == id).cloned()
    }

    fn upsert(&mut self, entry: LocationEntry) -> Result<()> {
        upsert_entry(&mut self.entries, entry)?;
        Ok(())
    }

    fn update_status(&mut self, id: &str, status: DoorStatus) -> Result<bool> {
        Ok(set_door_status(
            &mut self.entries,
            id,
            status,
            self.clock.now(),
        ))
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        Ok(remove_entry(&mut self.entries, id))
    }

    fn count(&self) -> usize {
        self.entries.len()
    }
}
