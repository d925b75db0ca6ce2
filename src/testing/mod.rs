//! Test doubles for the player's collaborators
//!
//! `MockOutput` stands in for the audio output, `FailingFile` for a file
//! handle whose read fails, and `EventLog` records everything the player emits.


use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::audio::{AudioOutput, AudioOutputError};
use crate::source::FileHandle;
use crate::state::{EventKind, PlayerEvent};
use crate::types::TrackSource;

/// Scriptable fake audio output
///
/// Records every call the player makes. Position and duration are set
/// directly to simulate elapsed playback and loaded metadata; playback can be
/// made to fail with `refuse_playback` or `refuse_next_play`.
#[derive(Debug, Clone)]
pub struct MockOutput {
    source: Option<TrackSource>,
    playing: bool,
    current_time: f64,
    duration: Option<f64>,
    volume: f32,
    refusal: Option<AudioOutputError>,
    refuse_once: bool,
    play_calls: usize,
    pause_calls: usize,
}

impl Default for MockOutput {
    fn default() -> Self {
        Self {
            source: None,
            playing: false,
            current_time: 0.0,
            duration: None,
            volume: 1.0,
            refusal: None,
            refuse_once: false,
            play_calls: 0,
            pause_calls: 0,
        }
    }
}

impl MockOutput {
    /// Create an idle output at full volume
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `play()` fail with `error`
    pub fn refuse_playback(&mut self, error: AudioOutputError) {
        self.refusal = Some(error);
        self.refuse_once = false;
    }

    /// Make only the next `play()` fail with `error`
    pub fn refuse_next_play(&mut self, error: AudioOutputError) {
        self.refusal = Some(error);
        self.refuse_once = true;
    }

    /// Let `play()` succeed again
    pub fn accept_playback(&mut self) {
        self.refusal = None;
    }

    /// Simulate loaded (or cleared) metadata
    pub fn set_duration(&mut self, duration: Option<f64>) {
        self.duration = duration;
    }

    /// Currently assigned source
    #[must_use]
    pub fn source(&self) -> Option<&TrackSource> {
        self.source.as_ref()
    }

    /// Whether the output believes it is playing
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Number of `play()` calls, including refused ones
    #[must_use]
    pub fn play_calls(&self) -> usize {
        self.play_calls
    }

    /// Number of `pause()` calls
    #[must_use]
    pub fn pause_calls(&self) -> usize {
        self.pause_calls
    }
}

impl AudioOutput for MockOutput {
    fn set_source(&mut self, source: &TrackSource) {
        self.source = Some(source.clone());
        self.current_time = 0.0;
        self.duration = None;
    }

    fn play(&mut self) -> Result<(), AudioOutputError> {
        self.play_calls += 1;
        if let Some(error) = &self.refusal {
            let error = error.clone();
            if self.refuse_once {
                self.refusal = None;
            }
            return Err(error);
        }
        if self.source.is_none() {
            return Err(AudioOutputError::NoSource);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

/// File handle whose read always fails
#[derive(Debug, Clone)]
pub struct FailingFile {
    name: String,
    message: String,
}

impl FailingFile {
    /// Create a handle that fails reads with `message`
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl FileHandle for FailingFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        0
    }

    fn mime_type(&self) -> &str {
        ""
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        Err(io::Error::other(self.message.clone()))
    }
}

/// Shared log of emitted events
///
/// Clones share the same log, so one clone can be moved into a subscriber
/// while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<PlayerEvent>>>,
}

impl EventLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriber callback that appends to this log
    pub fn recorder(&self) -> impl FnMut(&PlayerEvent) + Send + 'static {
        let events = self.events.clone();
        move |event| {
            if let Ok(mut events) = events.lock() {
                events.push(event.clone());
            }
        }
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn events(&self) -> Vec<PlayerEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Kinds of everything recorded so far
    #[must_use]
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events().iter().map(PlayerEvent::kind).collect()
    }

    /// Recorded events of one kind
    #[must_use]
    pub fn of_kind(&self, kind: EventKind) -> Vec<PlayerEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.kind() == kind)
            .collect()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}
