//! Tests for line admission and header detection

use super::*;
use crate::app::services::import_normalizer::admission::is_header_line;
use crate::app::services::import_normalizer::{Admission, admit_line};

#[test]
fn test_blank_lines() {
    let phrases = default_phrases();
    assert_eq!(admit_line("", &phrases), Admission::Blank);
    assert_eq!(admit_line("   \t ", &phrases), Admission::Blank);
}

#[test]
fn test_wkt_header_any_case() {
    let phrases = default_phrases();
    assert_eq!(admit_line("WKT,Name,Details", &phrases), Admission::Header);
    assert_eq!(admit_line("  wkt;nom", &phrases), Admission::Header);
    assert_eq!(admit_line("Wkt", &phrases), Admission::Header);
}

#[test]
fn test_gps_phrase_header() {
    let phrases = default_phrases();
    assert_eq!(
        admit_line("Nom, Coordonnées GPS, Statut", &phrases),
        Admission::Header
    );
    assert_eq!(
        admit_line("name,coordination gps,door", &phrases),
        Admission::Header
    );
}

#[test]
fn test_data_line_containing_phrase_is_skipped() {
    // Lexical check only: a real row mentioning the phrase is dropped too
    let phrases = default_phrases();
    assert!(is_header_line(
        "Relevé coordonnées GPS du parc, 33.61, -7.49",
        &phrases
    ));
}

#[test]
fn test_candidate_is_trimmed() {
    let phrases = default_phrases();
    assert_eq!(
        admit_line("   33.5731, -7.5898  ", &phrases),
        Admission::Candidate("33.5731, -7.5898")
    );
}

#[test]
fn test_wkt_only_as_prefix() {
    let phrases = default_phrases();
    assert_eq!(
        admit_line("Site WKT export, 33.5, -7.5", &phrases),
        Admission::Candidate("Site WKT export, 33.5, -7.5")
    );
}

#[test]
fn test_blank_phrases_are_ignored() {
    let phrases = vec![String::new(), "  ".to_string()];
    assert!(!is_header_line("Parc, 33.5, -7.5", &phrases));
}
