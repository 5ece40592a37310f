//! Configuration module for figdex
//!
//! Manages the database location and the defaults used when new items are
//! created. Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use crate::catalog::{DEFAULT_SOURCE, PLACEHOLDER_THUMBNAIL};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Keys accepted by `figdex config get/set`
pub const KEYS: [&str; 4] = ["database", "quiet", "placeholder_thumbnail", "default_source"];

/// Settings read from `config.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FigdexConfig {
    /// Catalog database location; the data directory is used when unset
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Same as passing `--quiet` on every run
    #[serde(default)]
    pub quiet: bool,

    /// Thumbnail for items whose first angle has no URL
    #[serde(default = "default_placeholder")]
    pub placeholder_thumbnail: String,

    /// Source prefilled for new items
    #[serde(default = "default_source")]
    pub default_source: String,
}

fn default_placeholder() -> String {
    PLACEHOLDER_THUMBNAIL.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Default for FigdexConfig {
    fn default() -> Self {
        Self {
            database: None,
            quiet: false,
            placeholder_thumbnail: default_placeholder(),
            default_source: default_source(),
        }
    }
}

impl FigdexConfig {
    /// `<config dir>/figdex/config.toml`
    ///
    /// # Errors
    ///
    /// Fails when the platform has no config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("figdex").join("config.toml"))
    }

    /// Default database location under the local data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_database_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("figdex").join("catalog"))
    }

    /// Configured database path, falling back to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the data directory
    /// cannot be determined.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => Self::default_database_path(),
        }
    }

    /// Read the config file, writing the defaults first when there is none
    ///
    /// # Errors
    ///
    /// Fails on an unreadable or malformed file, or when the defaults cannot be written.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            return Self::from_file(config_path);
        }
        let defaults = Self::default();
        defaults.save_to(&config_path)?;
        Ok(defaults)
    }

    /// Like [`FigdexConfig::load`], but asks the setup questions on first run
    ///
    /// # Errors
    ///
    /// See [`FigdexConfig::load`] and [`first_time_setup`].
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Read configuration from a specific TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.into()).format(FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Write the settings to the standard config path
    ///
    /// # Errors
    ///
    /// Fails when the directory or file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Same as [`FigdexConfig::save`].
    pub fn save_to(&self, config_path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = config_path.into();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConfigError::Message(format!("Cannot create {}: {e}", dir.display())))?;
        }
        let text = toml::to_string_pretty(self).map_err(|e| ConfigError::Message(format!("Cannot encode settings: {e}")))?;
        fs::write(&path, text).map_err(|e| ConfigError::Message(format!("Cannot write {}: {e}", path.display())))
    }

    /// Read a setting by key as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "database" => Ok(self
                .database
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "quiet" => Ok(self.quiet.to_string()),
            "placeholder_thumbnail" => Ok(self.placeholder_thumbnail.clone()),
            "default_source" => Ok(self.default_source.clone()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Change a setting by key
    ///
    /// An empty value for `database` resets it to the default location.
    /// The caller is responsible for saving.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key, or
    /// `ConfigError::Message` if the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "database" => {
                self.database = if value.trim().is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("Expected true or false, got '{value}'")))?;
            }
            "placeholder_thumbnail" => self.placeholder_thumbnail = value.to_string(),
            "default_source" => self.default_source = value.to_string(),
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}
