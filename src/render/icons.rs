//! Glyphs shown on the bar.

use crate::services::mpris::PlaybackState;

/// Opens the player picker
pub const MENU: &str = "☰";
/// Playback is running
pub const PLAYING: &str = "▶";
/// Playback is paused
pub const PAUSED: &str = "⏸";
/// Playback is stopped
pub const STOPPED: &str = "⏹";
/// Previous track
pub const PREVIOUS: &str = "⏮";
/// Next track
pub const NEXT: &str = "⏭";
/// Volume
pub const VOLUME: &str = "🔊";

/// Icon reflecting `state`.
pub fn for_state(state: PlaybackState) -> &'static str {
    match state {
        PlaybackState::Playing => PLAYING,
        PlaybackState::Paused => PAUSED,
        PlaybackState::Stopped => STOPPED,
    }
}
