//! Compiled patterns used by the line extractor

use regex::Regex;
use std::sync::LazyLock;

/// WKT point geometry: `POINT ( <lon> <lat> )`, case-insensitive
pub static WKT_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)POINT\s*\(\s*(-?\d+\.\d+)\s+(-?\d+\.\d+)\s*\)")
        .expect("WKT point pattern is valid")
});

/// First `<lat>, <lon>` decimal pair anywhere on a line
pub static DECIMAL_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(-?\d+\.\d+),\s*(-?\d+\.\d+)").expect("decimal pair pattern is valid"));

/// Map viewport marker in share links: `@<lat>,<lon>`
pub static MAPS_AT_COORDINATES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(-?\d+\.\d+),(-?\d+\.\d+)").expect("maps coordinate pattern is valid")
});
