//! Mutation rules over an in-memory location collection
//!
//! Both store implementations load the full collection, apply one of these
//! functions and then persist the result, so upsert/status/delete semantics
//! live in exactly one place.

use crate::Result;
use crate::app::models::{DoorStatus, LocationEntry};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Replace the entry with the same id or append it
///
/// Returns `true` when an existing entry was replaced.
pub fn upsert_entry(entries: &mut Vec<LocationEntry>, entry: LocationEntry) -> Result<bool> {
    entry.validate()?;

    match entries.iter_mut().find(|existing| existing.id == entry.id) {
        Some(existing) => {
            debug!("Replacing location {}", entry.id);
            *existing = entry;
            Ok(true)
        }
        None => {
            debug!("Appending location {}", entry.id);
            entries.push(entry);
            Ok(false)
        }
    }
}

/// Set the door status of one entry and refresh its `updated_at`
///
/// `updated_at` never drops below `created_at`, even if `now` does.
pub fn set_door_status(
    entries: &mut [LocationEntry],
    id: &str,
    status: DoorStatus,
    now: DateTime<Utc>,
) -> bool {
    match entries.iter_mut().find(|entry| entry.id == id) {
        Some(entry) => {
            entry.door_status = status;
            entry.updated_at = now.max(entry.created_at);
            true
        }
        None => {
            debug!("Status update for unknown location {} ignored", id);
            false
        }
    }
}

/// Remove the entry with this id, if present
pub fn remove_entry(entries: &mut Vec<LocationEntry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|entry| entry.id != id);
    let removed = entries.len() != before;

    if !removed {
        debug!("Delete for unknown location {} ignored", id);
    }
    removed
}
