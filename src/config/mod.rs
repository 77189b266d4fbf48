//! Configuration schema definitions and loading.
//!
//! The configuration is read once at startup and handed down by value;
//! nothing here is global or mutable after loading.

mod bar;
mod general;
mod loading;
mod paths;
mod player;
mod progress;

pub use bar::BarConfig;
pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::PlayerConfig;
pub use progress::ProgressConfig;

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Status bar rendering settings.
    #[serde(default)]
    pub bar: BarConfig,

    /// Player discovery settings.
    #[serde(default)]
    pub player: PlayerConfig,

    /// Position control settings.
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl Config {
    /// JSON schema of `config.toml`, for editor completion and validation.
    pub fn schema() -> Schema {
        schema_for!(Config)
    }
}
