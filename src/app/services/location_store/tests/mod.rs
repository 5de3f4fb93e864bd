//! Shared test utilities and fixtures for location store tests

use crate::app::models::{DoorStatus, GpsCoordinate, LocationEntry};
use crate::app::services::location_store::LocationStore;
use chrono::{DateTime, TimeZone, Utc};


/// Instant the test clocks are frozen at
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Create a test entry created `days_ago` days before [`test_now`]
pub fn create_test_entry(
    id: &str,
    name: &str,
    lat: &str,
    lon: &str,
    status: DoorStatus,
    days_ago: i64,
) -> LocationEntry {
    let created = test_now() - chrono::Duration::days(days_ago);
    let mut entry = LocationEntry::new(id, name, &GpsCoordinate::from_parts(lat, lon), created);
    entry.door_status = status;
    entry
}

/// Three entries with distinct ages and statuses
pub fn sample_entries() -> Vec<LocationEntry> {
    vec![
        create_test_entry(
            "loc-1",
            "Parc Sportif",
            "33.6107",
            "-7.4907",
            DoorStatus::NotYet,
            3,
        ),
        create_test_entry(
            "loc-2",
            "Café Central",
            "33.59",
            "-7.61",
            DoorStatus::Ok,
            2,
        ),
        create_test_entry(
            "loc-3",
            "Marché Central",
            "33.5950",
            "-7.6187",
            DoorStatus::NotYet,
            1,
        ),
    ]
}

/// Upsert/get/status/delete behaviour every store implementation must share
pub fn assert_store_contract(store: &mut dyn LocationStore) {
    assert!(store.list_all().is_empty());
    assert!(store.get_by_id("loc-1").is_none());

    for entry in sample_entries() {
        store.upsert(entry).unwrap();
    }
    assert_eq!(store.count(), 3);

    // Round trip
    let expected = sample_entries().remove(0);
    assert_eq!(store.get_by_id("loc-1").unwrap(), expected);

    // Upsert with an existing id replaces in place
    let mut renamed = expected.clone();
    renamed.name = "Parc Sportif Al Qods".to_string();
    renamed.updated_at = test_now();
    store.upsert(renamed.clone()).unwrap();
    assert_eq!(store.count(), 3);
    assert_eq!(store.get_by_id("loc-1").unwrap(), renamed);

    // Status update touches only door_status and updated_at
    assert!(store.update_status("loc-1", DoorStatus::Ok).unwrap());
    let updated = store.get_by_id("loc-1").unwrap();
    assert_eq!(updated.door_status, DoorStatus::Ok);
    assert_eq!(updated.updated_at, test_now());
    assert_eq!(updated.created_at, renamed.created_at);
    assert_eq!(updated.name, renamed.name);
    assert_eq!(updated.gps, renamed.gps);

    // Unknown ids are no-ops
    assert!(!store.update_status("missing", DoorStatus::Ok).unwrap());
    assert!(!store.delete("missing").unwrap());
    assert_eq!(store.count(), 3);

    assert!(store.delete("loc-2").unwrap());
    assert_eq!(store.count(), 2);
    assert!(store.get_by_id("loc-2").is_none());
}
