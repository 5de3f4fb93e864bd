//! Bulk import normalizer for pasted location text
//!
//! This module turns a blob of human-pasted text into new location records.
//! Each line is handled independently and best-effort: lines that yield no
//! coordinates are skipped silently and only show up in the returned counts.
//!
//! ## Architecture
//!
//! - [`admission`] - Line splitting and lexical header detection
//! - [`patterns`] - Compiled coordinate and link patterns
//! - [`extraction`] - Ordered pattern attempts producing a tagged [`LineMatch`]
//! - [`naming`] - Placeholder names and length truncation
//! - [`stats`] - Per-batch [`ImportSummary`]
//! - [`importer`] - [`LocationImporter`], which ties the steps together and
//!   upserts accepted lines into a store
//!
//! ## Usage
//!
//! ```rust
//! use localtrack::app::services::import_normalizer::LocationImporter;
//! use localtrack::config::ImportSettings;
//! use localtrack::{InMemoryStore, LocationStore};
//!
//! # fn example() -> localtrack::Result<()> {
//! let mut store = InMemoryStore::new();
//! let mut importer = LocationImporter::new(ImportSettings::default());
//! let summary = importer.import(
//!     &mut store,
//!     "WKT,nom,description\n\"POINT (-7.4907 33.6107)\",Parc Sportif,terrain",
//! )?;
//!
//! assert_eq!(summary.imported, 1);
//! assert_eq!(store.list_all()[0].gps, "33.6107, -7.4907");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod admission;
pub mod extraction;
pub mod importer;
pub mod naming;
pub mod patterns;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use admission::{Admission, admit_line};
pub use extraction::{LineMatch, MapsLink, ParsedLine, classify_line, parse_maps_link};
pub use importer::LocationImporter;
pub use stats::ImportSummary;
