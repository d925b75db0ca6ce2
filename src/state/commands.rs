//! Player operations requested from inside event subscribers

use crate::types::{RepeatMode, TrackId};

/// A player operation a subscriber asks for
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    /// Select and play the track at an index
    PlayTrack(usize),
    /// Toggle play/pause
    TogglePlay,
    /// Resume the selected track
    Resume,
    /// Pause playback
    Pause,
    /// Stop playback
    Stop,
    /// Skip to next track
    Next,
    /// Go to previous track
    Previous,
    /// Seek to a percentage of the current track
    Seek(f64),
    /// Set volume percentage
    SetVolume(f64),
    /// Flip shuffle
    ToggleShuffle,
    /// Advance the repeat mode
    ToggleRepeat,
    /// Set shuffle
    SetShuffle(bool),
    /// Set repeat mode
    SetRepeat(RepeatMode),
    /// Remove a track by ID
    RemoveTrack(TrackId),
    /// Stop and empty the playlist
    ClearPlaylist,
}

/// Commands issued by one subscriber call
///
/// The player runs them as soon as the callback returns, before the event
/// reaches the next subscriber. Events those commands emit are delivered in
/// full first, so they nest inside the event that triggered them.
#[derive(Debug, Default)]
pub struct PlayerCommands {
    queue: Vec<PlayerCommand>,
}

impl PlayerCommands {
    /// Create an empty command list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command
    pub fn push(&mut self, command: PlayerCommand) {
        self.queue.push(command);
    }

    /// Queue `play_track(index)`
    pub fn play_track(&mut self, index: usize) {
        self.push(PlayerCommand::PlayTrack(index));
    }

    /// Queue `toggle_play()`
    pub fn toggle_play(&mut self) {
        self.push(PlayerCommand::TogglePlay);
    }

    /// Queue `pause()`
    pub fn pause(&mut self) {
        self.push(PlayerCommand::Pause);
    }

    /// Queue `stop()`
    pub fn stop(&mut self) {
        self.push(PlayerCommand::Stop);
    }

    /// Queue `next()`
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.push(PlayerCommand::Next);
    }

    /// Queue `previous()`
    pub fn previous(&mut self) {
        self.push(PlayerCommand::Previous);
    }

    /// Queue `seek(percent)`
    pub fn seek(&mut self, percent: f64) {
        self.push(PlayerCommand::Seek(percent));
    }

    /// Queue `set_volume(percent)`
    pub fn set_volume(&mut self, percent: f64) {
        self.push(PlayerCommand::SetVolume(percent));
    }

    /// Queue `remove_track(id)`
    pub fn remove_track(&mut self, id: TrackId) {
        self.push(PlayerCommand::RemoveTrack(id));
    }

    /// Number of queued commands
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if nothing was queued
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl IntoIterator for PlayerCommands {
    type Item = PlayerCommand;
    type IntoIter = std::vec::IntoIter<PlayerCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.queue.into_iter()
    }
}
