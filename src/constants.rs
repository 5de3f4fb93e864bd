//! Application constants for LocalTrack
//!
//! This module contains storage keys, import heuristics and default values
//! used throughout the application.

// =============================================================================
// Storage
// =============================================================================

/// Well-known key under which the whole location collection is stored
pub const STORAGE_KEY: &str = "location_data_store";

/// File extension of the persisted store document
pub const STORE_FILE_EXTENSION: &str = "json";

/// Application directory name used under the platform data/config dirs
pub const APP_DIR_NAME: &str = "localtrack";

/// Configuration file name looked up in the platform config dir
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Data directory used when no platform data dir can be determined
pub const FALLBACK_DATA_DIR: &str = ".localtrack";

// =============================================================================
// Import Normalizer
// =============================================================================

/// Import heuristics for pasted text
pub mod import {
    /// Lines starting with this prefix (case-insensitive) are table headers
    pub const HEADER_PREFIX: &str = "wkt";

    /// GPS column header phrases; a line containing one is a table header
    pub const DEFAULT_HEADER_PHRASES: &[&str] = &["coordonnées gps", "coordination gps"];

    /// Path segment that introduces a place name in Maps share links
    pub const MAPS_PLACE_SEGMENT: &str = "/maps/place/";

    /// Marker that ends the name text in front of a pasted link
    pub const LINK_MARKER: &str = "http";

    /// First name fields shorter than this are joined with the next field
    pub const MIN_NAME_FIELD_CHARS: usize = 3;

    /// Extracted names longer than this are truncated
    pub const DEFAULT_MAX_NAME_LENGTH: usize = 120;

    /// Appended to truncated names
    pub const ELLIPSIS: &str = "...";

    /// Prefix of generated names for lines that carry no usable name
    pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "Location";

    /// Leading byte-order mark of UTF-8 spreadsheet exports
    pub const BYTE_ORDER_MARK: char = '\u{feff}';

    /// An extracted name consisting only of an empty quoted field
    pub const EMPTY_QUOTED_NAME: &str = "\"\"";
}

// =============================================================================
// Navigation
// =============================================================================

/// Base URL used to open a stored location in a maps application
pub const NAVIGATION_BASE_URL: &str = "https://www.google.com/maps/search/?api=1&query=";
