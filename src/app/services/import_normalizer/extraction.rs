//! Coordinate and name extraction from a single admitted line
//!
//! Extraction is an ordered list of pattern attempts. The first attempt that
//! matches decides the outcome:
//!
//! 1. WKT `POINT (lon lat)` geometry. Source order is X,Y (longitude first)
//!    and is swapped to latitude first.
//! 2. A plain `lat, lon` decimal pair, already latitude first.
//!
//! A WKT geometry therefore wins even when a decimal pair also appears
//! elsewhere on the line.

use super::patterns::{DECIMAL_PAIR, MAPS_AT_COORDINATES, WKT_POINT};
use crate::app::models::GpsCoordinate;
use crate::constants::import::{LINK_MARKER, MAPS_PLACE_SEGMENT, MIN_NAME_FIELD_CHARS};

/// Quote/comma boundary that ends the geometry column in CSV exports
const QUOTED_FIELD_BOUNDARY: &str = "\",";

/// Coordinates and raw name pulled from one line
///
/// The name is not yet finalized; it may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub gps: GpsCoordinate,
    pub name: String,
}

/// Tagged outcome of classifying one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    /// Matched a WKT point geometry
    Wkt(ParsedLine),
    /// Matched a decimal coordinate pair
    DecimalPair(ParsedLine),
    /// No coordinates found
    NoMatch,
}

impl LineMatch {
    /// The parsed line, if any attempt matched
    pub fn parsed(&self) -> Option<&ParsedLine> {
        match self {
            LineMatch::Wkt(parsed) | LineMatch::DecimalPair(parsed) => Some(parsed),
            LineMatch::NoMatch => None,
        }
    }

    pub fn into_parsed(self) -> Option<ParsedLine> {
        match self {
            LineMatch::Wkt(parsed) | LineMatch::DecimalPair(parsed) => Some(parsed),
            LineMatch::NoMatch => None,
        }
    }
}

type Attempt = fn(&str) -> Option<LineMatch>;

/// Pattern attempts in priority order
const ATTEMPTS: [Attempt; 2] = [attempt_wkt, attempt_decimal_pair];

fn attempt_wkt(line: &str) -> Option<LineMatch> {
    extract_wkt(line).map(LineMatch::Wkt)
}

fn attempt_decimal_pair(line: &str) -> Option<LineMatch> {
    extract_decimal_pair(line).map(LineMatch::DecimalPair)
}

/// Run the pattern attempts in order and return the first match
pub fn classify_line(line: &str) -> LineMatch {
    ATTEMPTS
        .iter()
        .find_map(|attempt| attempt(line))
        .unwrap_or(LineMatch::NoMatch)
}

// =============================================================================
// WKT geometry
// =============================================================================

/// Extract coordinates and name from a line carrying a WKT point
pub fn extract_wkt(line: &str) -> Option<ParsedLine> {
    let captures = WKT_POINT.captures(line)?;
    let geometry = captures.get(0)?;

    // X is longitude, Y is latitude
    let longitude = captures.get(1)?.as_str();
    let latitude = captures.get(2)?.as_str();

    Some(ParsedLine {
        gps: GpsCoordinate::from_parts(latitude, longitude),
        name: wkt_name(line, geometry.end()),
    })
}

/// Name that follows the geometry column
///
/// With a quoted geometry column the name is the first field after the first
/// `",` boundary, joined with the next field when it is too short to be a
/// name on its own. Without one, it is the text after the geometry's closing
/// paren up to the next comma.
fn wkt_name(line: &str, geometry_end: usize) -> String {
    if let Some(boundary) = line.find(QUOTED_FIELD_BOUNDARY) {
        let rest = &line[boundary + QUOTED_FIELD_BOUNDARY.len()..];
        let segment = rest.split(QUOTED_FIELD_BOUNDARY).next().unwrap_or(rest);
        let fields: Vec<&str> = segment.split(',').map(clean_field).collect();

        let first = fields.first().copied().unwrap_or_default();
        return match fields.get(1) {
            Some(next) if first.chars().count() < MIN_NAME_FIELD_CHARS && !next.is_empty() => {
                format!("{}, {}", first, next)
            }
            _ => first.to_string(),
        };
    }

    let after = line[geometry_end..]
        .trim_start_matches(|c: char| c == '"' || c == ',' || c.is_whitespace());
    clean_field(after.split(',').next().unwrap_or_default()).to_string()
}

/// Trim whitespace and surrounding double quotes from a CSV field
fn clean_field(field: &str) -> &str {
    field.trim().trim_matches('"').trim()
}

// =============================================================================
// Decimal pair
// =============================================================================

/// Extract coordinates and name from a line carrying a `lat, lon` pair
pub fn extract_decimal_pair(line: &str) -> Option<ParsedLine> {
    let captures = DECIMAL_PAIR.captures(line)?;
    let pair = captures.get(0)?;
    let latitude = captures.get(1)?.as_str();
    let longitude = captures.get(2)?.as_str();

    let name = match place_segment(line) {
        Some(segment) => decode_place_name(segment),
        None => {
            let link_start = line.find(LINK_MARKER).unwrap_or(line.len());
            strip_name_punctuation(&line[..pair.start().min(link_start)]).to_string()
        }
    };

    Some(ParsedLine {
        gps: GpsCoordinate::from_parts(latitude, longitude),
        name,
    })
}

/// Raw place-name segment of a Maps share link, if the line has one
fn place_segment(line: &str) -> Option<&str> {
    let start = line.find(MAPS_PLACE_SEGMENT)? + MAPS_PLACE_SEGMENT.len();
    let rest = &line[start..];
    Some(rest.split('/').next().unwrap_or(rest))
}

/// Strip leading/trailing quotes, commas and whitespace
fn strip_name_punctuation(text: &str) -> &str {
    text.trim_matches(|c: char| c == '"' || c == '\'' || c == ',' || c.is_whitespace())
}

/// Decode a URL place-name segment: `+` is a space, `%XX` is a UTF-8 byte
///
/// Malformed escapes are kept as literal text.
pub fn decode_place_name(segment: &str) -> String {
    let spaced = segment.replace('+', " ");
    let bytes = spaced.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(high), Some(low)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                decoded.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        decoded.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&decoded).trim().to_string()
}

fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

// =============================================================================
// Maps share links
// =============================================================================

/// Coordinates (and place name, if any) pulled from a Maps share link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsLink {
    pub gps: GpsCoordinate,
    pub place_name: Option<String>,
}

/// Read the `@lat,lon` viewport marker and place name from a share link
///
/// # Examples
/// ```
/// # use localtrack::app::services::import_normalizer::parse_maps_link;
/// let link = parse_maps_link("https://www.google.com/maps/place/Tour+Eiffel/@48.8584,2.2945,17z")
///     .unwrap();
/// assert_eq!(link.gps.to_string(), "48.8584, 2.2945");
/// assert_eq!(link.place_name.as_deref(), Some("Tour Eiffel"));
/// ```
pub fn parse_maps_link(text: &str) -> Option<MapsLink> {
    let captures = MAPS_AT_COORDINATES.captures(text)?;
    let gps = GpsCoordinate::from_parts(&captures[1], &captures[2]);
    let place_name = place_segment(text)
        .map(decode_place_name)
        .filter(|name| !name.is_empty());

    Some(MapsLink { gps, place_name })
}
