//! Location lookup, filtering and summary functionality
//!
//! Stores return entries in no particular order; this module provides the
//! orderings and filters callers apply on top: newest-first listing, free-text
//! search on name or coordinates, door status filtering and status counts.

use crate::app::models::{DoorStatus, LocationEntry};
use serde::Serialize;

/// Filter applied to a listing of stored locations
#[derive(Debug, Clone, Default)]
pub struct LocationQuery {
    search: Option<String>,
    status: Option<DoorStatus>,
}

impl LocationQuery {
    /// A query that matches every entry
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep entries whose name contains `text` (case-insensitive) or whose
    /// gps text contains it
    ///
    /// Blank text matches everything.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        let text = text.into().trim().to_lowercase();
        self.search = if text.is_empty() { None } else { Some(text) };
        self
    }

    /// Keep entries with this door status
    pub fn with_status(mut self, status: DoorStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Check a single entry against the query
    pub fn matches(&self, entry: &LocationEntry) -> bool {
        if let Some(status) = self.status {
            if entry.door_status != status {
                return false;
            }
        }

        match &self.search {
            Some(text) => entry.name.to_lowercase().contains(text) || entry.gps.contains(text),
            None => true,
        }
    }

    /// Filter entries and order them newest first
    ///
    /// # Examples
    /// ```
    /// # use localtrack::app::services::location_store::LocationQuery;
    /// # use localtrack::DoorStatus;
    /// let pending = LocationQuery::new()
    ///     .with_search("parc")
    ///     .with_status(DoorStatus::NotYet)
    ///     .apply(Vec::new());
    /// assert!(pending.is_empty());
    /// ```
    pub fn apply(&self, entries: Vec<LocationEntry>) -> Vec<LocationEntry> {
        let mut matching: Vec<LocationEntry> =
            entries.into_iter().filter(|entry| self.matches(entry)).collect();
        sort_newest_first(&mut matching);
        matching
    }
}

/// Order entries by `created_at`, most recent first
///
/// The sort is stable, so entries from one import batch keep their input order.
pub fn sort_newest_first(entries: &mut [LocationEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Door status counts over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub total: usize,
    pub ok: usize,
    pub not_yet: usize,
}

impl StatusSummary {
    /// Count statuses across `entries`
    pub fn from_entries(entries: &[LocationEntry]) -> Self {
        entries.iter().fold(Self::default(), |mut summary, entry| {
            summary.total += 1;
            match entry.door_status {
                DoorStatus::Ok => summary.ok += 1,
                DoorStatus::NotYet => summary.not_yet += 1,
            }
            summary
        })
    }

    /// Share of entries confirmed `OK`, as a percentage
    pub fn completion_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.ok as f64 / self.total as f64) * 100.0
        }
    }
}
