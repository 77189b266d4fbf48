use super::PlayerId;

/// Errors that can occur during media operations
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// Player selection was disabled by the user
    #[error("Player selection is disabled")]
    SelectionDisabled,

    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Reading a property of the active player failed
    #[error("Failed to query {property} from {player}: {details}")]
    QueryFailed {
        /// Player that was queried
        player: PlayerId,
        /// Property that could not be read
        property: &'static str,
        /// Underlying failure
        details: String,
    },

    /// Failed to control the player
    #[error("Failed to control player: {0}")]
    ControlFailed(String),

    /// Failed to initialize the media service
    #[error("Failed to initialize media service: {0}")]
    InitializationFailed(String),
}

impl MediaError {
    /// Builds a [`MediaError::QueryFailed`] for `property` of `player`.
    pub fn query(player: &PlayerId, property: &'static str, error: impl std::fmt::Display) -> Self {
        Self::QueryFailed {
            player: player.clone(),
            property,
            details: error.to_string(),
        }
    }
}
