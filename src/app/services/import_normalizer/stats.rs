//! Import statistics and result structures

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of one import batch
///
/// Zero imported lines is a soft failure: nothing was stored and the caller
/// should tell the user no valid data was found. Any positive count is a
/// success, even when other lines were skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportSummary {
    /// Instant shared by every record created in this batch
    pub started_at: DateTime<Utc>,

    /// Non-blank lines seen, headers included
    pub lines_seen: usize,

    /// Lines dropped as table headers
    pub header_lines: usize,

    /// Lines stored as new locations
    pub imported: usize,

    /// Candidate lines with no extractable coordinates
    pub skipped: usize,

    /// Accepted lines matched through a WKT point
    pub wkt_matches: usize,

    /// Accepted lines matched through a decimal pair
    pub decimal_pair_matches: usize,

    /// Accepted lines that received a placeholder name
    pub placeholder_names: usize,

    /// Accepted lines whose name was truncated
    pub truncated_names: usize,

    /// Ids of the created locations, in input order
    pub imported_ids: Vec<String>,
}

impl ImportSummary {
    /// Create empty statistics for a batch starting at `started_at`
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            lines_seen: 0,
            header_lines: 0,
            imported: 0,
            skipped: 0,
            wkt_matches: 0,
            decimal_pair_matches: 0,
            placeholder_names: 0,
            truncated_names: 0,
            imported_ids: Vec::new(),
        }
    }

    /// Nothing was imported
    pub fn is_empty(&self) -> bool {
        self.imported == 0
    }

    /// Share of candidate (non-header) lines that were imported, as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        let candidates = self.imported + self.skipped;
        if candidates == 0 {
            0.0
        } else {
            (self.imported as f64 / candidates as f64) * 100.0
        }
    }

    /// One-line description of the batch
    pub fn summary(&self) -> String {
        format!(
            "Imported {} locations from {} lines ({} skipped, {} headers; {} WKT, {} coordinate pairs)",
            self.imported,
            self.lines_seen,
            self.skipped,
            self.header_lines,
            self.wkt_matches,
            self.decimal_pair_matches
        )
    }
}
