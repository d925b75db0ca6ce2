//! # focus-playlist
//!
//! Background music playlist for a focus timer.
//!
//! ## Features
//!
//! - Ordered playlist of user-selected audio files
//! - Play, pause, stop, next, previous, seek and volume
//! - Shuffle and three-way repeat (`none`, `one`, `all`)
//! - Persistence with a metadata-only fallback when storage is full
//! - Subscriber notifications for every state change; subscribers may drive
//!   the player in turn
//!
//! ## Example
//!
//! ```rust
//! use focus_playlist::prelude::*;
//! use focus_playlist::storage::MemoryStore;
//! use focus_playlist::testing::MockOutput;
//!
//! # async fn example() -> Result<(), PlayerError> {
//! let mut player = PlaylistPlayer::new(MockOutput::new(), MemoryStore::new());
//! player.subscribe(EventKind::TrackChanged, |event| println!("{event:?}"));
//!
//! let file = MemoryFile::new("rain.mp3", "audio/mpeg", vec![0; 64]);
//! player.add_track(&file).await?;
//! player.toggle_play();
//!
//! // Forward notifications from the audio backend
//! player.handle_output_event(OutputEvent::Play);
//! assert!(player.is_playing());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Player**: `PlaylistPlayer` - the state machine hosts talk to
//! - **Collaborators**: `AudioOutput`, `KeyValueStore` and `FileHandle` traits
//!   supplied by the host
//! - **Building blocks**: playlist cursor, event emitter and persistence

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
/// Event subscriptions
pub mod state;
/// Core types
pub mod types;

/// Testing utilities
pub mod testing;

/// Audio output abstraction
pub mod audio;
/// Playlist, progress and volume building blocks
pub mod control;
mod player;
/// Audio file sources
pub mod source;
/// Playlist persistence
pub mod storage;

// Re-exports
pub use audio::{AudioOutput, AudioOutputError, OutputEvent};
pub use control::{PlaybackProgress, Volume, format_time};
pub use error::{PlayerError, Result};
pub use player::PlaylistPlayer;
pub use source::{FileHandle, MemoryFile};
pub use state::{EventKind, PlayerCommand, PlayerCommands, PlayerEvent, SubscriptionId};
pub use storage::{KeyValueStore, StorageError};
pub use types::{PlayerConfig, PlayerState, RepeatMode, Track, TrackId, TrackMetadata, TrackSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        AudioOutput, EventKind, FileHandle, MemoryFile, OutputEvent, PlayerCommands, PlayerConfig,
        PlayerError, PlayerEvent, PlaylistPlayer, RepeatMode, Track, TrackId, Volume,
    };
}
