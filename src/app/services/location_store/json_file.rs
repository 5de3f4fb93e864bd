//! JSON document location store
//!
//! The whole collection lives in one JSON array stored under the well-known
//! key `location_data_store` (the file `<data_dir>/location_data_store.json`).
//! Every operation reads the full document, applies the change in memory and,
//! for mutations, writes the full document back through a temporary file that
//! is renamed over the target, so a reader never observes a half-written
//! collection.

use super::LocationStore;
use super::collection::{remove_entry, set_door_status, upsert_entry};
use crate::app::models::{DoorStatus, LocationEntry};
use crate::app::services::providers::{Clock, SystemClock};
use crate::constants::{STORAGE_KEY, STORE_FILE_EXTENSION};
use crate::{Error, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Location store persisted as a single JSON document
pub struct JsonFileStore {
    path: PathBuf,
    clock: Arc<dyn Clock>,
}

impl JsonFileStore {
    /// Open the store document inside `data_dir`
    ///
    /// Nothing is created until the first mutation; a missing document reads
    /// as an empty collection.
    pub fn open(data_dir: &Path) -> Self {
        Self::at_path(data_dir.join(format!("{}.{}", STORAGE_KEY, STORE_FILE_EXTENSION)))
    }

    /// Use an explicit document path
    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the clock used to stamp status updates
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Path of the backing document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection
    ///
    /// A missing, unreadable or malformed document yields an empty collection.
    fn load(&self) -> Vec<LocationEntry> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store document at {}, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    "Failed to read store document {}: {} - treating as empty",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        if content.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<LocationEntry>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Store document {} is malformed ({}) - treating as empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Write the full collection, replacing the document atomically
    fn save(&self, entries: &[LocationEntry]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&dir).map_err(|e| {
            Error::io(
                format!("Failed to create store directory {}", dir.display()),
                e,
            )
        })?;

        let mut temp = NamedTempFile::new_in(&dir).map_err(|e| {
            Error::io(
                format!("Failed to create temporary file in {}", dir.display()),
                e,
            )
        })?;

        serde_json::to_writer_pretty(&mut temp, entries).map_err(|e| {
            Error::serialization(
                format!("Failed to encode store document {}", self.path.display()),
                e,
            )
        })?;
        temp.flush()?;

        temp.persist(&self.path).map_err(|e| {
            Error::io(
                format!("Failed to replace store document {}", self.path.display()),
                e.error,
            )
        })?;

        debug!(
            "Wrote {} locations to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

impl LocationStore for JsonFileStore {
    fn list_all(&self) -> Vec<LocationEntry> {
        self.load()
    }

    fn upsert(&mut self, entry: LocationEntry) -> Result<()> {
        let mut entries = self.load();
        upsert_entry(&mut entries, entry)?;
        self.save(&entries)
    }

    fn update_status(&mut self, id: &str, status: DoorStatus) -> Result<bool> {
        let mut entries = self.load();
        if !set_door_status(&mut entries, id, status, self.clock.now()) {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut entries = self.load();
        if !remove_entry(&mut entries, id) {
            return Ok(false);
        }
        self.save(&entries)?;
        Ok(true)
    }
}
