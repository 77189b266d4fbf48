use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Status bar rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct BarConfig {
    /// Maximum number of characters of the track title before it is truncated.
    pub max_title_size: usize,

    /// Maximum number of characters of the artist before it is truncated.
    pub max_artist_size: usize,

    /// Command the bar's click and scroll actions invoke (e.g. `mediabar next`).
    pub command: String,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            max_title_size: 30,
            max_artist_size: 20,
            command: String::from("mediabar"),
        }
    }
}
