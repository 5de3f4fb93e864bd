//! Import orchestration: admission, extraction, naming and store insert

use super::admission::{Admission, admit_line};
use super::extraction::{LineMatch, classify_line};
use super::naming::finalize_name;
use super::stats::ImportSummary;
use crate::Result;
use crate::app::models::LocationEntry;
use crate::app::services::location_store::LocationStore;
use crate::app::services::providers::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::config::ImportSettings;
use crate::constants::import::BYTE_ORDER_MARK;
use std::sync::Arc;
use tracing::{debug, info};

/// Bulk importer for pasted location text
///
/// The importer only ever creates new entries; it never edits or deletes
/// what is already in the store, and it does not deduplicate, so importing
/// the same text twice stores two sets of records with distinct ids.
pub struct LocationImporter {
    settings: ImportSettings,
    clock: Arc<dyn Clock>,
    ids: Box<dyn IdGenerator>,
}

impl LocationImporter {
    /// Create an importer using the system clock and random UUID ids
    pub fn new(settings: ImportSettings) -> Self {
        Self {
            settings,
            clock: Arc::new(SystemClock),
            ids: Box::new(UuidGenerator),
        }
    }

    /// Replace the clock that stamps each batch
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, ids: Box<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Import every usable line of `raw_text` into `store`
    ///
    /// Lines are processed in input order, which also fixes the order ids are
    /// generated in. All records of the batch share one creation instant,
    /// read from the clock once before the first line.
    ///
    /// # Errors
    /// Only store write failures are errors. Lines without coordinates are
    /// counted in [`ImportSummary::skipped`].
    pub fn import(
        &mut self,
        store: &mut dyn LocationStore,
        raw_text: &str,
    ) -> Result<ImportSummary> {
        let started_at = self.clock.now();
        let mut summary = ImportSummary::new(started_at);

        info!("Starting location import at {}", started_at);

        // Spreadsheet UTF-8 exports start with a BOM that `trim` keeps
        let raw_text = raw_text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw_text);

        for (line_number, line) in raw_text.lines().enumerate() {
            let candidate = match admit_line(line, &self.settings.header_phrases) {
                Admission::Blank => continue,
                Admission::Header => {
                    summary.lines_seen += 1;
                    summary.header_lines += 1;
                    debug!("Line {}: skipped header", line_number + 1);
                    continue;
                }
                Admission::Candidate(candidate) => {
                    summary.lines_seen += 1;
                    candidate
                }
            };

            let parsed = match classify_line(candidate) {
                LineMatch::Wkt(parsed) => {
                    summary.wkt_matches += 1;
                    parsed
                }
                LineMatch::DecimalPair(parsed) => {
                    summary.decimal_pair_matches += 1;
                    parsed
                }
                LineMatch::NoMatch => {
                    summary.skipped += 1;
                    debug!("Line {}: no coordinates found", line_number + 1);
                    continue;
                }
            };

            let final_name = finalize_name(&parsed.name, summary.imported + 1, &self.settings);
            if final_name.placeholder {
                summary.placeholder_names += 1;
            }
            if final_name.truncated {
                summary.truncated_names += 1;
            }

            let entry = LocationEntry::new(
                self.ids.next_id(),
                final_name.name,
                &parsed.gps,
                started_at,
            );
            debug!(
                "Line {}: '{}' at {} -> {}",
                line_number + 1,
                entry.name,
                entry.gps,
                entry.id
            );

            let id = entry.id.clone();
            store.upsert(entry)?;
            summary.imported += 1;
            summary.imported_ids.push(id);
        }

        info!("{}", summary.summary());
        Ok(summary)
    }
}
