//! Shared test utilities and fixtures for import normalizer tests

use crate::app::services::import_normalizer::LocationImporter;
use crate::app::services::providers::{FixedClock, SequentialIdGenerator};
use crate::config::ImportSettings;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;

pub mod admission_tests;
pub mod extraction_tests;

/// Instant every test batch is stamped with
pub fn batch_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
}

/// Default header phrases as owned strings
pub fn default_phrases() -> Vec<String> {
    ImportSettings::default().header_phrases
}

/// Importer with a frozen clock and `imp-<n>` ids
pub fn create_test_importer() -> LocationImporter {
    create_test_importer_with(ImportSettings::default())
}

pub fn create_test_importer_with(settings: ImportSettings) -> LocationImporter {
    LocationImporter::new(settings)
        .with_clock(Arc::new(FixedClock::new(batch_instant())))
        .with_id_generator(Box::new(SequentialIdGenerator::new("imp")))
}
