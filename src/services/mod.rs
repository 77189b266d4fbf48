/// MPRIS media player control service
pub mod mpris;

pub use mpris::{
    MediaError, MprisPlayer, MprisSelector, PlaybackState, PlayerControl, PlayerId,
    PlayerSelector, PlayerSignal, TrackMetadata, Volume,
};
