//! Line admission for pasted import text
//!
//! Header detection is purely lexical: a line is a header if, lowercased, it
//! starts with `wkt` or contains one of the configured GPS column phrases.
//! A data line whose name happens to contain such a phrase is skipped too.

use crate::constants::import::HEADER_PREFIX;

/// How a raw input line is treated before any parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission<'a> {
    /// Empty after trimming
    Blank,
    /// Table header row
    Header,
    /// Trimmed line to hand to the extractor
    Candidate(&'a str),
}

/// Classify one raw line
pub fn admit_line<'a>(line: &'a str, header_phrases: &[String]) -> Admission<'a> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Admission::Blank;
    }

    if is_header_line(trimmed, header_phrases) {
        return Admission::Header;
    }

    Admission::Candidate(trimmed)
}

/// Lexical header check (case-insensitive)
pub fn is_header_line(line: &str, header_phrases: &[String]) -> bool {
    let lower = line.to_lowercase();

    lower.starts_with(HEADER_PREFIX)
        || header_phrases
            .iter()
            .filter(|phrase| !phrase.trim().is_empty())
            .any(|phrase| lower.contains(&phrase.to_lowercase()))
}
