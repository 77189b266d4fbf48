use crate::services::mpris::{MediaError, PlaybackState, PlayerControl, TrackMetadata, Volume};

use super::drift;

/// Display-ready state of the active player at one instant.
///
/// A snapshot is either fully populated from the player or not built at
/// all; there is no partial snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Track title, may be empty
    pub title: String,
    /// Track artist(s), may be empty
    pub artist: String,
    /// Playback status
    pub status: PlaybackState,
    /// Volume in `[0, 1]`
    pub volume: Volume,
    /// Best current estimate of the position, in seconds
    pub position: f64,
    /// Track length in seconds, 0 when unknown
    pub duration: f64,
}

impl Snapshot {
    /// Assemble a snapshot from the individual reads.
    pub fn new(
        metadata: TrackMetadata,
        status: PlaybackState,
        volume: Volume,
        position: f64,
    ) -> Self {
        Self {
            title: metadata.title,
            artist: metadata.artist,
            status,
            volume,
            position: position.max(0.0),
            duration: metadata.length.max(0.0),
        }
    }

    /// Query metadata, status, volume and position from `player`.
    ///
    /// # Errors
    ///
    /// Returns the first failing query; nothing is assembled in that case.
    pub async fn query(player: &dyn PlayerControl) -> Result<Self, MediaError> {
        let metadata = player.metadata().await?;
        let status = player.playback_status().await?;
        let volume = player.volume().await?;
        let position = player.position().await?;

        Ok(Self::new(metadata, status, volume, position))
    }

    /// Whether the player is stopped, in which case title and artist are stale.
    pub fn is_stopped(&self) -> bool {
        self.status == PlaybackState::Stopped
    }

    /// Position as a fraction of the duration, `None` when the duration is unknown.
    pub fn progress(&self) -> Option<f64> {
        drift::expected_fraction(self.position, self.duration)
    }
}
