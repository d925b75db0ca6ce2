//! Audio output abstraction
//!
//! The player drives exactly one output stream and never decodes audio
//! itself. Hosts supply an implementation backed by whatever playback engine
//! they have (a browser audio element, a native decoder, a fake in tests) and
//! forward its notifications to the player as `OutputEvent`s.

use crate::types::TrackSource;

/// Errors from audio output
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AudioOutputError {
    /// Format not supported
    #[error("Format not supported: {0}")]
    Unsupported(String),

    /// Decoder failure
    #[error("Decode error: {0}")]
    Decode(String),

    /// Output in use elsewhere
    #[error("Output busy")]
    Busy,

    /// Play requested before a source was assigned
    #[error("No source assigned")]
    NoSource,
}

/// Notifications raised by the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputEvent {
    /// Current source played to the end
    Ended,
    /// Playback position advanced
    TimeUpdate,
    /// Duration of the current source became known
    LoadedMetadata,
    /// Output started playing
    Play,
    /// Output paused
    Pause,
}

/// Single-stream audio output
///
/// Assigning a new source supersedes whatever was playing before.
pub trait AudioOutput: Send {
    /// Assign the source to play next
    fn set_source(&mut self, source: &TrackSource);

    /// Start or resume playback of the assigned source
    ///
    /// # Errors
    ///
    /// Returns error if the output refuses to play (format, decode, busy)
    fn play(&mut self) -> Result<(), AudioOutputError>;

    /// Pause playback, keeping the position
    fn pause(&mut self);

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Move the position, in seconds
    fn set_current_time(&mut self, seconds: f64);

    /// Duration of the assigned source in seconds, if known
    fn duration(&self) -> Option<f64>;

    /// Current volume (0.0 to 1.0)
    fn volume(&self) -> f32;

    /// Set volume (0.0 to 1.0)
    fn set_volume(&mut self, volume: f32);
}

impl<T: AudioOutput + ?Sized> AudioOutput for Box<T> {
    fn set_source(&mut self, source: &TrackSource) {
        (**self).set_source(source);
    }

    fn play(&mut self) -> Result<(), AudioOutputError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        (**self).set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn volume(&self) -> f32 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }
}
