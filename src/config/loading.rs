use std::{fs, path::Path};

use tracing::{debug, instrument};

use super::{Config, ConfigPaths};
use crate::{MediabarError, Result};

/// Environment variable overriding `bar.max_title_size`.
pub const MAX_TITLE_SIZE_ENV: &str = "MEDIABAR_MAX_TITLE_SIZE";

/// Environment variable overriding `bar.max_artist_size`.
pub const MAX_ARTIST_SIZE_ENV: &str = "MEDIABAR_MAX_ARTIST_SIZE";

impl Config {
    /// Loads the main configuration file and applies environment overrides.
    ///
    /// A missing file is not an error: the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined,
    /// the file cannot be read, or its TOML content is invalid.
    #[instrument]
    pub fn load() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Loads a configuration file without consulting the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| match e {
            MediabarError::TomlParseError { details, .. } => {
                MediabarError::toml_parse(details, Some(path))
            }
            other => other,
        })
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `MediabarError::TomlParseError` if the text is not a valid configuration.
    pub fn from_toml(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| MediabarError::toml_parse(e, None))
    }

    /// Applies size overrides from the environment.
    ///
    /// Values that do not parse as a non-negative integer are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(size) = lookup(MAX_TITLE_SIZE_ENV).and_then(|v| v.trim().parse().ok()) {
            self.bar.max_title_size = size;
        }

        if let Some(size) = lookup(MAX_ARTIST_SIZE_ENV).and_then(|v| v.trim().parse().ok()) {
            self.bar.max_artist_size = size;
        }
    }
}
