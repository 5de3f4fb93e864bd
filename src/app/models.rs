//! Data models for LocalTrack
//!
//! This module contains the core data structures for representing stored
//! locations: the persisted [`LocationEntry`], its two-valued [`DoorStatus`]
//! and the canonical [`GpsCoordinate`] text form.

use crate::constants::NAVIGATION_BASE_URL;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Canonical stored form: `<lat>, <lon>`
static CANONICAL_GPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?\d+(?:\.\d+)?, -?\d+(?:\.\d+)?$").expect("canonical gps pattern is valid")
});

/// Loose user input: `<lat>,<lon>` with any spacing around the comma
static LOOSE_GPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$")
        .expect("loose gps pattern is valid")
});

// =============================================================================
// GPS Coordinate
// =============================================================================

/// A latitude/longitude pair kept as the decimal text it was read from
///
/// Keeping the source text means an imported `33.6107` is stored as
/// `33.6107`, never re-rendered through a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpsCoordinate {
    latitude: String,
    longitude: String,
}

impl GpsCoordinate {
    /// Build a coordinate from already-matched decimal texts (latitude first)
    pub fn from_parts(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Parse loosely formatted `lat,lon` text into canonical form
    ///
    /// # Examples
    /// ```
    /// # use localtrack::GpsCoordinate;
    /// let gps = GpsCoordinate::parse("48.8584,2.2945").unwrap();
    /// assert_eq!(gps.to_string(), "48.8584, 2.2945");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let captures = LOOSE_GPS
            .captures(text)
            .ok_or_else(|| Error::invalid_gps(text))?;

        Ok(Self::from_parts(&captures[1], &captures[2]))
    }

    /// Check whether stored text is in the canonical `<lat>, <lon>` form
    pub fn is_canonical(text: &str) -> bool {
        CANONICAL_GPS.is_match(text)
    }

    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    pub fn longitude(&self) -> &str {
        &self.longitude
    }
}

impl std::fmt::Display for GpsCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for GpsCoordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// =============================================================================
// Door Status
// =============================================================================

/// Whether the access door at a location has been confirmed usable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoorStatus {
    /// Door confirmed usable
    #[serde(rename = "ok")]
    Ok,

    /// Not checked yet
    #[default]
    #[serde(rename = "not yet")]
    NotYet,
}

impl DoorStatus {
    /// The other status
    pub fn toggled(self) -> Self {
        match self {
            DoorStatus::Ok => DoorStatus::NotYet,
            DoorStatus::NotYet => DoorStatus::Ok,
        }
    }

    /// Wire label, as persisted
    pub fn label(self) -> &'static str {
        match self {
            DoorStatus::Ok => "ok",
            DoorStatus::NotYet => "not yet",
        }
    }
}

impl FromStr for DoorStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "ok" => Ok(DoorStatus::Ok),
            "not yet" | "not-yet" | "not_yet" | "notyet" => Ok(DoorStatus::NotYet),
            _ => Err(Error::data_validation(format!(
                "Invalid door status '{}': must be 'ok' or 'not-yet'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for DoorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Location Entry
// =============================================================================

/// A stored location record
///
/// Field names on the wire match the persisted document layout
/// (`doorStatus`, `createdAt`, `updatedAt`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntry {
    /// Opaque unique identifier, never reused
    pub id: String,

    /// Free-text location name
    pub name: String,

    /// Canonical `<lat>, <lon>` text
    pub gps: String,

    /// Door confirmation status
    pub door_status: DoorStatus,

    /// Creation instant, immutable once written
    pub created_at: DateTime<Utc>,

    /// Last mutation instant
    pub updated_at: DateTime<Utc>,
}

impl LocationEntry {
    /// Create a fresh entry with `NOT_YET` status and both timestamps at `now`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        gps: &GpsCoordinate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gps: gps.to_string(),
            door_status: DoorStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the entry before it is written to a store
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::data_validation("Location id cannot be empty"));
        }

        if !GpsCoordinate::is_canonical(&self.gps) {
            return Err(Error::invalid_gps(&self.gps));
        }

        if self.updated_at < self.created_at {
            return Err(Error::data_validation(format!(
                "Location {} updated_at {} is before created_at {}",
                self.id, self.updated_at, self.created_at
            )));
        }

        Ok(())
    }

    /// Link that opens this location in a maps application
    pub fn navigation_url(&self) -> String {
        let query: String = self.gps.chars().filter(|c| !c.is_whitespace()).collect();
        format!("{}{}", NAVIGATION_BASE_URL, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_entry() -> LocationEntry {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        LocationEntry::new(
            "loc-1",
            "Parc Sportif",
            &GpsCoordinate::from_parts("33.6107", "-7.4907"),
            now,
        )
    }

    mod gps_tests {
        use super::*;

        #[test]
        fn test_parse_normalizes_spacing() {
            let gps = GpsCoordinate::parse("  48.8584 ,2.2945 ").unwrap();
            assert_eq!(gps.latitude(), "48.8584");
            assert_eq!(gps.longitude(), "2.2945");
            assert_eq!(gps.to_string(), "48.8584, 2.2945");
        }

        #[test]
        fn test_parse_rejects_non_numeric() {
            assert!(GpsCoordinate::parse("north, south").is_err());
            assert!(GpsCoordinate::parse("48.8584").is_err());
            assert!(GpsCoordinate::parse("48.8584, 2.2945, 10").is_err());
        }

        #[test]
        fn test_canonical_form() {
            assert!(GpsCoordinate::is_canonical("33.5731, -7.5898"));
            assert!(GpsCoordinate::is_canonical("-33.5, 7"));
            assert!(!GpsCoordinate::is_canonical("33.5731,-7.5898"));
            assert!(!GpsCoordinate::is_canonical(" 33.5731, -7.5898"));
            assert!(!GpsCoordinate::is_canonical("33.5731 -7.5898"));
        }
    }

    mod door_status_tests {
        use super::*;

        #[test]
        fn test_default_is_not_yet() {
            assert_eq!(DoorStatus::default(), DoorStatus::NotYet);
        }

        #[test]
        fn test_toggle() {
            assert_eq!(DoorStatus::Ok.toggled(), DoorStatus::NotYet);
            assert_eq!(DoorStatus::NotYet.toggled(), DoorStatus::Ok);
        }

        #[test]
        fn test_from_str_accepts_cli_spellings() {
            assert_eq!("OK".parse::<DoorStatus>().unwrap(), DoorStatus::Ok);
            assert_eq!("not-yet".parse::<DoorStatus>().unwrap(), DoorStatus::NotYet);
            assert_eq!("not yet".parse::<DoorStatus>().unwrap(), DoorStatus::NotYet);
            assert!("maybe".parse::<DoorStatus>().is_err());
        }

        #[test]
        fn test_wire_labels() {
            assert_eq!(serde_json::to_string(&DoorStatus::Ok).unwrap(), "\"ok\"");
            assert_eq!(
                serde_json::to_string(&DoorStatus::NotYet).unwrap(),
                "\"not yet\""
            );
        }
    }

    mod entry_tests {
        use super::*;

        #[test]
        fn test_new_entry_defaults() {
            let entry = create_test_entry();
            assert_eq!(entry.gps, "33.6107, -7.4907");
            assert_eq!(entry.door_status, DoorStatus::NotYet);
            assert_eq!(entry.created_at, entry.updated_at);
            assert!(entry.validate().is_ok());
        }

        #[test]
        fn test_validate_rejects_bad_gps() {
            let mut entry = create_test_entry();
            entry.gps = "somewhere".to_string();
            assert!(matches!(entry.validate(), Err(Error::InvalidGps { .. })));
        }

        #[test]
        fn test_validate_rejects_updated_before_created() {
            let mut entry = create_test_entry();
            entry.updated_at = entry.created_at - chrono::Duration::seconds(1);
            assert!(entry.validate().is_err());
        }

        #[test]
        fn test_camel_case_wire_format() {
            let entry = create_test_entry();
            let json = serde_json::to_value(&entry).unwrap();
            assert_eq!(json["doorStatus"], "not yet");
            assert_eq!(json["createdAt"], "2024-03-01T09:30:00Z");
            assert!(json.get("door_status").is_none());
        }

        #[test]
        fn test_navigation_url_strips_whitespace() {
            let entry = create_test_entry();
            assert_eq!(
                entry.navigation_url(),
                "https://www.google.com/maps/search/?api=1&query=33.6107,-7.4907"
            );
        }
    }
}
