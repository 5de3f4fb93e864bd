//! Configuration management and validation.
//!
//! Provides the application configuration (where the store document lives)
//! and the heuristics used by the bulk importer. Both can be read from a TOML
//! file; any field left out falls back to its default.

use crate::constants::import::{
    DEFAULT_HEADER_PHRASES, DEFAULT_MAX_NAME_LENGTH, DEFAULT_PLACEHOLDER_PREFIX,
};
use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, FALLBACK_DATA_DIR};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Heuristics applied when normalizing pasted import text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Prefix of generated names; the 1-based ordinal is appended
    pub placeholder_prefix: String,

    /// Extracted names longer than this many characters are truncated
    pub max_name_length: usize,

    /// Case-insensitive phrases that mark a line as a table header
    pub header_phrases: Vec<String>,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            header_phrases: DEFAULT_HEADER_PHRASES
                .iter()
                .map(|phrase| phrase.to_string())
                .collect(),
        }
    }
}

impl ImportSettings {
    /// Set the placeholder name prefix
    pub fn with_placeholder_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.placeholder_prefix = prefix.into();
        self
    }

    /// Set the maximum stored name length
    pub fn with_max_name_length(mut self, max_name_length: usize) -> Self {
        self.max_name_length = max_name_length;
        self
    }

    /// Replace the header phrases
    pub fn with_header_phrases(mut self, phrases: Vec<String>) -> Self {
        self.header_phrases = phrases;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.placeholder_prefix.trim().is_empty() {
            return Err(Error::configuration(
                "import.placeholder_prefix cannot be empty",
            ));
        }

        if self.max_name_length == 0 {
            return Err(Error::configuration(
                "import.max_name_length must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the store document; platform data dir when unset
    pub data_dir: Option<PathBuf>,

    /// Import heuristics
    pub import: ImportSettings,
}

impl AppConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;

        let config: Self = toml::from_str(&text)
            .map_err(|e| Error::config_parse(path.display().to_string(), e))?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load `<config_dir>/localtrack/config.toml` if it exists, else defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Platform location of the configuration file
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Set the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }

    /// Set the import heuristics
    pub fn with_import_settings(mut self, import: ImportSettings) -> Self {
        self.import = import;
        self
    }

    /// Directory the store document lives in
    ///
    /// The configured directory wins, then `<data_dir>/localtrack`, then
    /// `./.localtrack` when the platform has no data directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(Error::configuration("data_dir cannot be empty"));
            }
        }

        self.import.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.data_dir.is_none());
        assert_eq!(config.import.placeholder_prefix, "Location");
        assert_eq!(config.import.max_name_length, 120);
        assert!(
            config
                .import
                .header_phrases
                .contains(&"coordonnées gps".to_string())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_data_dir("/tmp/locations")
            .with_import_settings(ImportSettings::default().with_max_name_length(40));

        assert_eq!(config.resolve_data_dir(), PathBuf::from("/tmp/locations"));
        assert_eq!(config.import.max_name_length, 40);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
data_dir = "/srv/localtrack"

[import]
placeholder_prefix = "Toilette"
"#,
        );

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/localtrack")));
        assert_eq!(config.import.placeholder_prefix, "Toilette");
        assert_eq!(config.import.max_name_length, 120);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("data_dir = [");
        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Path::new("/nonexistent/localtrack.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_validation_rejects_zero_length() {
        let file = write_config("[import]\nmax_name_length = 0\n");
        let result = AppConfig::load(file.path());
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation_rejects_blank_prefix() {
        let settings = ImportSettings::default().with_placeholder_prefix("   ");
        assert!(settings.validate().is_err());
    }
}
