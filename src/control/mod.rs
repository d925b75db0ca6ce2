//! Playlist, volume and progress control

pub mod playback;
pub mod queue;
pub mod volume;

#[cfg(test)]
mod tests;

pub use playback::{PlaybackProgress, format_time, known_duration};
pub use queue::Playlist;
pub use volume::Volume;
