/// Player control and selection contracts
pub mod control;
/// Player discovery and best-player selection
pub mod discovery;
/// Media player error types
pub mod error;
/// Track metadata decoding
pub mod metadata;
/// D-Bus backed player handle
pub mod player;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Player identity, playback state and volume types
pub mod types;
/// MPRIS utility functions
pub mod utils;

pub use control::*;
pub use discovery::*;
pub use error::*;
pub use metadata::TrackMetadata;
pub use player::*;
pub use proxy::*;
pub use types::*;
