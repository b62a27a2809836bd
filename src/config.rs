//! Library configuration.
//!
//! Hosts pass a YAML document; every field is optional.
//!
//! ```yaml
//! storage:
//!   data_dir: /data/user/0/app/files
//!   favorites_key: favorites
//!   background_writes: true
//! home:
//!   featured_count: 3
//! logging:
//!   level: info
//!   format: json
//! ```

use crate::favorites::FAVORITES_KEY;
use crate::logging::LogFormat;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Overrides the storage directory when no `data_dir` is configured.
pub const DATA_DIR_ENV: &str = "RECIPE_BOOK_DATA_DIR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("No data directory available on this platform")]
    NoDataDir,

    #[error("Data directory is not valid UTF-8: {0}")]
    InvalidPath(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub home: HomeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding persisted state; resolved by [`resolve_data_dir`] when unset
    pub data_dir: Option<Utf8PathBuf>,
    pub favorites_key: String,
    /// Persist favorites on a background thread instead of inline
    pub background_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            favorites_key: FAVORITES_KEY.to_string(),
            background_writes: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub featured_count: usize,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self { featured_count: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive such as `info` or `recipe_book=debug`
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl Config {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// The configured data directory, or the platform default.
    pub fn data_dir(&self) -> Result<Utf8PathBuf, ConfigError> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => resolve_data_dir(),
        }
    }
}

/// Resolve where persisted state lives.
///
/// Uses `RECIPE_BOOK_DATA_DIR` when set, otherwise the platform data
/// directory joined with `recipe-book`.
pub fn resolve_data_dir() -> Result<Utf8PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(Utf8PathBuf::from(dir));
        }
    }

    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    let data_dir = Utf8PathBuf::from_path_buf(data_dir)
        .map_err(|p| ConfigError::InvalidPath(p.display().to_string()))?;
    Ok(data_dir.join("recipe-book"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.favorites_key, "favorites");
        assert!(config.storage.background_writes);
        assert!(config.storage.data_dir.is_none());
        assert_eq!(config.home.featured_count, 3);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml_str("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_full_document() {
        let yaml = indoc! {r#"
            storage:
              data_dir: /tmp/recipes
              favorites_key: saved_recipes
              background_writes: false
            home:
              featured_count: 5
            logging:
              level: debug
              format: json
        "#};

        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.storage.data_dir,
            Some(Utf8PathBuf::from("/tmp/recipes"))
        );
        assert_eq!(config.storage.favorites_key, "saved_recipes");
        assert!(!config.storage.background_writes);
        assert_eq!(config.home.featured_count, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.data_dir().unwrap(), Utf8PathBuf::from("/tmp/recipes"));
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let yaml = indoc! {r#"
            home:
              featured_count: 1
        "#};

        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(config.home.featured_count, 1);
        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_document() {
        let result = Config::from_yaml_str("home: [unclosed");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));

        let result = Config::from_yaml_str("logging:\n  format: xml\n");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("config.yaml")).unwrap();
        fs::write(&path, "storage:\n  favorites_key: favs\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.storage.favorites_key, "favs");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load_from_path(Utf8Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    #[serial] // Both tests mutate RECIPE_BOOK_DATA_DIR
    fn test_resolve_data_dir_env_override() {
        std::env::set_var(DATA_DIR_ENV, "/tmp/recipe-book-override");
        let resolved = resolve_data_dir();
        let from_config = Config::default().data_dir();
        std::env::remove_var(DATA_DIR_ENV);

        assert_eq!(
            resolved.unwrap(),
            Utf8PathBuf::from("/tmp/recipe-book-override")
        );
        assert_eq!(
            from_config.unwrap(),
            Utf8PathBuf::from("/tmp/recipe-book-override")
        );
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir_empty_env_falls_through() {
        std::env::set_var(DATA_DIR_ENV, "");
        let resolved = resolve_data_dir();
        std::env::remove_var(DATA_DIR_ENV);

        match resolved {
            Ok(dir) => assert_eq!(dir.file_name(), Some("recipe-book")),
            // Hosts without a platform data directory
            Err(e) => assert!(matches!(e, ConfigError::NoDataDir)),
        }
    }
}
