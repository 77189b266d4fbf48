use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::BoxStream;

use super::{MediaError, PlaybackState, PlayerId, TrackMetadata, Volume};

/// A signal delivered by the active player's subscription.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerSignal {
    /// `org.freedesktop.DBus.NameOwnerChanged` for the player's bus name
    NameOwnerChanged {
        /// Bus name whose owner changed
        name: String,
        /// Previous unique owner, empty if the name was unowned
        old_owner: String,
        /// New unique owner, empty if the name was released
        new_owner: String,
    },

    /// `org.freedesktop.DBus.Properties.PropertiesChanged` on the player object
    PropertiesChanged {
        /// Interface whose properties changed
        interface: String,
    },

    /// `Seeked` with the new position in seconds
    Seeked {
        /// Position after the jump, in seconds
        position: f64,
    },
}

impl PlayerSignal {
    /// Whether this signal reports that `player` lost its bus name.
    ///
    /// Only the ownership change of the given player counts; the same
    /// signal for any other name is ordinary noise.
    pub fn is_exit_of(&self, player: &PlayerId) -> bool {
        match self {
            Self::NameOwnerChanged {
                name, old_owner, ..
            } => name == player.bus_name() && !old_owner.is_empty(),
            _ => false,
        }
    }
}

/// Control channel of one running player.
///
/// Every query is an authoritative read; implementations never answer
/// from a cache.
#[async_trait]
pub trait PlayerControl: Send + Sync {
    /// Identifier of the player behind this handle
    fn id(&self) -> &PlayerId;

    /// Current track metadata
    async fn metadata(&self) -> Result<TrackMetadata, MediaError>;

    /// Current playback status
    async fn playback_status(&self) -> Result<PlaybackState, MediaError>;

    /// Current volume
    async fn volume(&self) -> Result<Volume, MediaError>;

    /// Current position in seconds
    async fn position(&self) -> Result<f64, MediaError>;

    /// Length of the current track in seconds, 0 when unknown
    async fn length(&self) -> Result<f64, MediaError> {
        Ok(self.metadata().await?.length)
    }

    /// Jump to an absolute position in seconds
    async fn set_position(&self, seconds: f64) -> Result<(), MediaError>;

    /// Toggle between playing and paused
    async fn play_pause(&self) -> Result<(), MediaError>;

    /// Skip to the next track
    async fn next(&self) -> Result<(), MediaError>;

    /// Go back to the previous track
    async fn previous(&self) -> Result<(), MediaError>;

    /// Set the volume
    async fn set_volume(&self, volume: Volume) -> Result<(), MediaError>;

    /// Subscribe to the player's signals.
    ///
    /// The stream ends when the underlying connection goes away.
    async fn signals(&self) -> Result<BoxStream<'static, PlayerSignal>, MediaError>;
}

/// Picks the player a run should follow.
#[async_trait]
pub trait PlayerSelector: Send + Sync {
    /// Returns the best available player, or `None` when no player runs.
    ///
    /// # Errors
    ///
    /// Returns `MediaError::SelectionDisabled` when the user switched
    /// selection off, or any error raised while enumerating players.
    async fn best_player(&self) -> Result<Option<Arc<dyn PlayerControl>>, MediaError>;
}
