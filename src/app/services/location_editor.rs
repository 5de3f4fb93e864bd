//! Manual entry, editing and door status toggling
//!
//! Everything here goes through the [`LocationStore`] capability; the editor
//! holds no state of its own.

use crate::Result;
use crate::app::models::{DoorStatus, GpsCoordinate, LocationEntry};
use crate::app::services::location_store::LocationStore;
use crate::app::services::providers::{Clock, IdGenerator};
use tracing::{debug, info};

/// User-entered fields for a new or edited location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationDraft {
    /// Existing id when editing, `None` for a new location
    pub id: Option<String>,
    pub name: String,
    /// Free-form `lat,lon` text; spacing is normalized on save
    pub gps: String,
    pub door_status: DoorStatus,
}

impl LocationDraft {
    /// Draft for a new location with `NOT_YET` status
    pub fn new(name: impl Into<String>, gps: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            gps: gps.into(),
            door_status: DoorStatus::default(),
        }
    }

    /// Draft pre-filled from a stored entry
    pub fn from_entry(entry: &LocationEntry) -> Self {
        Self {
            id: Some(entry.id.clone()),
            name: entry.name.clone(),
            gps: entry.gps.clone(),
            door_status: entry.door_status,
        }
    }

    pub fn with_status(mut self, door_status: DoorStatus) -> Self {
        self.door_status = door_status;
        self
    }
}

/// Save a draft as a new or updated entry
///
/// A draft without an id gets a fresh one. When editing, `created_at` is kept
/// from the stored entry; an unknown id is stored as a new entry under that
/// id. `updated_at` is always set to the current instant.
///
/// # Errors
/// Returns [`crate::Error::InvalidGps`] if the gps text is not a decimal
/// pair, or a store error if the write fails.
pub fn save_location(
    store: &mut dyn LocationStore,
    clock: &dyn Clock,
    ids: &mut dyn IdGenerator,
    draft: LocationDraft,
) -> Result<LocationEntry> {
    let gps = GpsCoordinate::parse(&draft.gps)?;
    let now = clock.now();

    let existing = draft.id.as_deref().and_then(|id| store.get_by_id(id));
    let id = draft.id.unwrap_or_else(|| ids.next_id());

    let mut entry = LocationEntry::new(id, draft.name.trim(), &gps, now);
    entry.door_status = draft.door_status;

    match existing {
        Some(previous) => {
            entry.created_at = previous.created_at;
            entry.updated_at = now.max(previous.created_at);
            debug!("Updating location {}", entry.id);
        }
        None => info!("Adding location {} ({})", entry.id, entry.name),
    }

    store.upsert(entry.clone())?;
    Ok(entry)
}

/// Flip a location's door status between `OK` and `NOT_YET`
///
/// Returns the new status, or `None` if no entry has that id.
pub fn toggle_door_status(store: &mut dyn LocationStore, id: &str) -> Result<Option<DoorStatus>> {
    let Some(entry) = store.get_by_id(id) else {
        return Ok(None);
    };

    let next = entry.door_status.toggled();
    store.update_status(id, next)?;
    debug!("Toggled location {} to {}", id, next);
    Ok(Some(next))
}
