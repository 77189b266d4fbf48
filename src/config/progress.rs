use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Position control configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    /// Milliseconds between position polls.
    pub poll_interval_ms: u64,
}

impl ProgressConfig {
    /// Polling interval as a [`Duration`], never shorter than 50ms.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(50))
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}
