use std::fmt;
use std::ops::Deref;

/// Bus name prefix shared by every MPRIS player.
pub const MPRIS_BUS_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Unique identifier for a media player
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a PlayerId from a D-Bus bus name
    pub fn from_bus_name(bus_name: &str) -> Self {
        Self(bus_name.to_string())
    }

    /// Create a PlayerId from a short player name such as `mpv`
    pub fn from_short_name(name: &str) -> Self {
        Self(format!("{MPRIS_BUS_PREFIX}{name}"))
    }

    /// Get the D-Bus bus name
    pub fn bus_name(&self) -> &str {
        &self.0
    }

    /// Bus name without the MPRIS prefix (`org.mpris.MediaPlayer2.mpv` -> `mpv`)
    pub fn short_name(&self) -> &str {
        self.0.strip_prefix(MPRIS_BUS_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current playback state of a media player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Player is currently playing
    Playing,

    /// Player is paused
    Paused,

    /// Player is stopped
    Stopped,
}

impl From<&str> for PlaybackState {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "Playing"),
            Self::Paused => write!(f, "Paused"),
            Self::Stopped => write!(f, "Stopped"),
        }
    }
}

/// Volume of the player
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Volume(f64);

impl Volume {
    /// Create a new instance of a volume with safeguarded values
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the volume as a percentage
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Volume shifted by `delta`, clamped to the valid range
    pub fn offset(&self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_state_parses_mpris_strings() {
        assert_eq!(PlaybackState::from("Playing"), PlaybackState::Playing);
        assert_eq!(PlaybackState::from("Paused"), PlaybackState::Paused);
        assert_eq!(PlaybackState::from("Stopped"), PlaybackState::Stopped);
        assert_eq!(PlaybackState::from("garbage"), PlaybackState::Stopped);
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(*Volume::new(1.7), 1.0);
        assert_eq!(*Volume::new(-0.2), 0.0);
        assert_eq!(*Volume::new(f64::NAN), 0.0);
        assert_eq!(*Volume::new(0.95).offset(0.1), 1.0);
    }

    #[test]
    fn short_name_strips_prefix() {
        let id = PlayerId::from_short_name("mpv");
        assert_eq!(id.bus_name(), "org.mpris.MediaPlayer2.mpv");
        assert_eq!(id.short_name(), "mpv");
        assert_eq!(PlayerId::from_bus_name("custom").short_name(), "custom");
    }
}
