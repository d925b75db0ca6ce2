//! Core types module

mod config;
mod state;
mod track;


pub use config::{DEFAULT_METADATA_KEY, DEFAULT_PLAYLIST_KEY, PlayerConfig, PlayerConfigBuilder};
pub use state::{PlayerState, RepeatMode};
pub use track::{Track, TrackId, TrackMetadata, TrackSource, display_name};
