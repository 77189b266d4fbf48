use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Player discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// List of player bus name patterns to ignore during discovery
    pub ignored_players: Vec<String>,
}
