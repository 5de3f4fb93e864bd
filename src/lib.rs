//! LocalTrack Library
//!
//! A Rust library for recording physical locations (name, GPS coordinates and
//! a two-valued door status) and for importing them in bulk from loosely
//! structured pasted text.
//!
//! This library provides tools for:
//! - Normalizing CSV exports with embedded WKT `POINT` geometry, Google Maps
//!   share links and raw "lat, lon" pairs into clean location records
//! - Storing records durably as a single JSON document with upsert-by-id
//!   semantics and corruption-tolerant loading
//! - Manual entry, editing and door status toggling
//! - Listing, searching and summarising stored locations

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod import_normalizer;
        pub mod location_editor;
        pub mod location_store;
        pub mod providers;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DoorStatus, GpsCoordinate, LocationEntry};
pub use app::services::import_normalizer::{ImportSummary, LocationImporter};
pub use app::services::location_store::{InMemoryStore, JsonFileStore, LocationStore};
pub use config::AppConfig;

/// Result type alias for LocalTrack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for LocalTrack operations
///
/// Per-line import misses, lookups of unknown ids and corrupted store files are
/// not errors; they are reported through return values instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding of the store document failed
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file could not be parsed
    #[error("Configuration parse error in '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// GPS text is not two comma-separated decimal numbers
    #[error("Invalid GPS coordinates '{value}': expected '<lat>, <lon>' decimal pair")]
    InvalidGps { value: String },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Location not found
    #[error("Location not found: id = {id}")]
    LocationNotFound { id: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(path: impl Into<String>, source: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid GPS error
    pub fn invalid_gps(value: impl Into<String>) -> Self {
        Self::InvalidGps {
            value: value.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a location not found error
    pub fn location_not_found(id: impl Into<String>) -> Self {
        Self::LocationNotFound { id: id.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON encoding failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            path: "unknown".to_string(),
            source: error,
        }
    }
}
