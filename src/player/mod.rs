//! Playlist player state machine

use rand::Rng;

use crate::audio::{AudioOutput, OutputEvent};
use crate::control::{PlaybackProgress, Playlist, Volume, known_duration};
use crate::error::{PlayerError, Result};
use crate::source::{FileHandle, encode_data_uri};
use crate::state::{
    EventEmitter, EventKind, PlayerCommand, PlayerCommands, PlayerEvent, SubscriptionId,
};
use crate::storage::{KeyValueStore, PlaylistStore};
use crate::types::{
    PlayerConfig, PlayerState, RepeatMode, Track, TrackId, TrackMetadata, TrackSource,
};


/// Deepest chain of subscriber commands run inside one another
const MAX_COMMAND_DEPTH: usize = 16;

/// Playlist player driving a single audio output
///
/// Owns the track list, the play cursor and the shuffle/repeat modes. Every
/// change is persisted through the store and announced to subscribers.
///
/// # Example
///
/// ```rust
/// use focus_playlist::storage::MemoryStore;
/// use focus_playlist::testing::MockOutput;
/// use focus_playlist::{EventKind, PlaylistPlayer};
///
/// let mut player = PlaylistPlayer::new(MockOutput::new(), MemoryStore::new());
/// player.subscribe(EventKind::TrackChanged, |event| println!("{event:?}"));
///
/// // Nothing to play yet
/// player.toggle_play();
/// assert_eq!(player.current_index(), None);
/// ```
pub struct PlaylistPlayer<O: AudioOutput> {
    /// Audio output
    output: O,
    /// Tracks and cursor
    playlist: Playlist,
    /// Persistence
    store: PlaylistStore,
    /// Subscribers
    events: EventEmitter,
    /// Mirrors the output's play/pause notifications
    is_playing: bool,
    /// Shuffle enabled
    shuffle: bool,
    /// Repeat mode
    repeat: RepeatMode,
    /// Last volume applied to the output
    volume: Volume,
    /// Configuration
    config: PlayerConfig,
    /// Subscriber commands currently running inside one another
    command_depth: usize,
}

impl<O: AudioOutput> PlaylistPlayer<O> {
    /// Create a player with default config, restoring any saved playlist
    pub fn new(output: O, store: impl KeyValueStore + 'static) -> Self {
        Self::with_config(output, store, PlayerConfig::default())
    }

    /// Create with custom config, restoring any saved playlist
    pub fn with_config(
        mut output: O,
        store: impl KeyValueStore + 'static,
        config: PlayerConfig,
    ) -> Self {
        let store = PlaylistStore::new(store, &config.playlist_key, &config.metadata_key);
        let playlist = Playlist::from_tracks(store.load());
        tracing::info!("Restored playlist with {} tracks", playlist.len());

        output.set_volume(config.initial_volume.as_f32());

        Self {
            output,
            playlist,
            store,
            events: EventEmitter::new(),
            is_playing: false,
            shuffle: config.initial_shuffle,
            repeat: config.initial_repeat,
            volume: config.initial_volume,
            config,
            command_depth: 0,
        }
    }

    // === Subscriptions ===

    /// Subscribe to one kind of event
    pub fn subscribe<F>(&mut self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent) + Send + 'static,
    {
        self.events.subscribe(kind, callback)
    }

    /// Subscribe to every event
    pub fn subscribe_all<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent) + Send + 'static,
    {
        self.events.subscribe_all(callback)
    }

    /// Subscribe to one kind of event with a callback that may drive the player
    ///
    /// Commands the callback queues run as soon as it returns, before later
    /// subscribers see the event; any events they cause are delivered first.
    pub fn subscribe_with_commands<F>(&mut self, kind: EventKind, callback: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent, &mut PlayerCommands) + Send + 'static,
    {
        self.events.subscribe_with_commands(kind, callback)
    }

    /// Remove a subscriber
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Number of subscribers that receive events of `kind`
    #[must_use]
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.events.subscriber_count(kind)
    }

    // === Playlist ===

    /// Add a user-selected file to the end of the playlist
    ///
    /// Files with a direct path are referenced in place; anything else is
    /// read fully and embedded as a data URI. No size or format checks are
    /// made here.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::ReadError` if the file cannot be read. The
    /// playlist is left unchanged and no event is emitted.
    pub async fn add_track<F>(&mut self, file: &F) -> Result<Track>
    where
        F: FileHandle + ?Sized,
    {
        let source = match file.path() {
            Some(path) => TrackSource::Path(path.to_path_buf()),
            None => {
                let bytes = file.read_all().await.map_err(|e| PlayerError::ReadError {
                    file_name: file.name().to_string(),
                    message: e.to_string(),
                })?;
                TrackSource::Embedded(encode_data_uri(file.mime_type(), &bytes))
            }
        };

        let mut track = Track::new(file.name(), source);
        while !self.playlist.add(track.clone()) {
            track.id = TrackId::generate();
        }
        tracing::info!("Added track {} ({})", track.name, track.id);

        self.save();
        self.emit(PlayerEvent::TrackAdded {
            track: track.clone(),
        });
        Ok(track)
    }

    /// Remove a track by ID
    ///
    /// Removing the selected track stops playback first. Unknown ids are
    /// ignored and emit nothing.
    pub fn remove_track(&mut self, id: &TrackId) -> Option<Track> {
        let index = self.playlist.position(id)?;
        if self.playlist.current_index() == Some(index) {
            self.stop();
        }

        let (_, track) = self.playlist.remove(id)?;
        tracing::info!("Removed track {} ({})", track.name, track.id);

        self.save();
        self.emit(PlayerEvent::TrackRemoved { id: track.id.clone() });
        Some(track)
    }

    /// Stop playback and empty the playlist
    pub fn clear_playlist(&mut self) {
        self.stop();
        self.playlist.clear();
        self.save();
        self.emit(PlayerEvent::PlaylistCleared);
    }

    // === Transport ===

    /// Select the track at `index` and start playing it
    ///
    /// Out-of-range indices are ignored. If the output refuses to play, an
    /// `Error` event follows the `TrackChanged` event and the selection is
    /// kept.
    pub fn play_track(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index).cloned() else {
            tracing::debug!("play_track({}) out of range", index);
            return;
        };
        tracing::debug!("Playing track {} at index {}", track.name, index);

        self.playlist.set_current(index);
        self.output.set_source(&track.source);
        let outcome = self.output.play();

        let name = track.name.clone();
        self.emit(PlayerEvent::TrackChanged { track, index });

        if let Err(e) = outcome {
            self.report_playback_error(PlayerError::PlaybackError {
                message: format!("cannot play {name}: {e}"),
            });
        }
    }

    /// Resume the selected track where it was paused
    pub fn resume(&mut self) {
        if let Err(e) = self.output.play() {
            self.report_playback_error(PlayerError::PlaybackError {
                message: format!("cannot resume: {e}"),
            });
        }
    }

    /// Toggle play/pause
    ///
    /// With nothing selected this starts the first track.
    pub fn toggle_play(&mut self) {
        if self.playlist.is_empty() {
            return;
        }

        if self.is_playing {
            self.pause();
        } else if self.playlist.current_index().is_none() {
            self.play_track(0);
        } else {
            self.resume();
        }
    }

    /// Pause, keeping cursor and position
    pub fn pause(&mut self) {
        self.output.pause();
    }

    /// Pause, rewind and deselect the current track
    pub fn stop(&mut self) {
        tracing::debug!("Stopping playback");
        self.output.pause();
        self.output.set_current_time(0.0);
        self.playlist.clear_current();
        self.emit(PlayerEvent::Stop);
    }

    /// Skip to next track
    ///
    /// Shuffle picks any index at random, possibly the current one. Without
    /// shuffle, running off the end wraps under `RepeatMode::All` and stops
    /// otherwise.
    // Method name `next` is standard for playback control, but does not implement `Iterator`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.playlist.is_empty() {
            return;
        }

        let index = if self.shuffle {
            rand::thread_rng().gen_range(0..self.playlist.len())
        } else {
            match self.playlist.next_index(self.repeat) {
                Some(index) => index,
                None => {
                    tracing::debug!("Reached end of playlist");
                    self.stop();
                    return;
                }
            }
        };
        self.play_track(index);
    }

    /// Go to previous track
    ///
    /// Past the restart threshold this rewinds the current track instead.
    /// Running off the start wraps under `RepeatMode::All` and stays on the
    /// first track otherwise.
    pub fn previous(&mut self) {
        if self.playlist.is_empty() {
            return;
        }

        if self.output.current_time() > self.config.restart_threshold.as_secs_f64() {
            tracing::debug!("Restarting current track");
            self.output.set_current_time(0.0);
            return;
        }

        if let Some(index) = self.playlist.previous_index(self.repeat) {
            self.play_track(index);
        }
    }

    /// Seek to a percentage (0 - 100) of the current track
    ///
    /// Ignored while the duration is unknown. Out-of-range input is clamped.
    pub fn seek(&mut self, percent: f64) {
        let Some(duration) = known_duration(self.output.duration()) else {
            return;
        };
        if percent.is_nan() {
            return;
        }
        let position = duration * percent.clamp(0.0, 100.0) / 100.0;
        tracing::debug!("Seeking to {:.2}s", position);
        self.output.set_current_time(position);
    }

    /// Set output volume from a percentage (0 - 100), clamped
    pub fn set_volume(&mut self, percent: f64) {
        self.volume = Volume::from_percent(percent);
        self.output.set_volume(self.volume.as_f32());
    }

    // === Modes ===

    /// Flip shuffle, returning the new state
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.emit(PlayerEvent::ShuffleChanged {
            shuffle: self.shuffle,
        });
        self.shuffle
    }

    /// Advance the repeat mode (`Off -> One -> All -> Off`), returning the new mode
    pub fn toggle_repeat(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.emit(PlayerEvent::RepeatChanged { mode: self.repeat });
        self.repeat
    }

    /// Set shuffle; emits only when the value changes
    pub fn set_shuffle(&mut self, shuffle: bool) {
        if self.shuffle != shuffle {
            self.toggle_shuffle();
        }
    }

    /// Set repeat mode; emits only when the value changes
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        if self.repeat != mode {
            self.repeat = mode;
            self.emit(PlayerEvent::RepeatChanged { mode });
        }
    }

    // === Output notifications ===

    /// Feed a notification from the audio output into the state machine
    pub fn handle_output_event(&mut self, event: OutputEvent) {
        match event {
            OutputEvent::Ended => {
                if self.repeat == RepeatMode::One {
                    self.output.set_current_time(0.0);
                    self.resume();
                } else {
                    self.next();
                }
            }
            OutputEvent::TimeUpdate => {
                let progress =
                    PlaybackProgress::new(self.output.current_time(), self.output.duration());
                self.emit(PlayerEvent::TimeUpdate {
                    current_time: progress.position_secs,
                    duration: progress.duration_secs,
                    progress: progress.percent(),
                });
            }
            OutputEvent::LoadedMetadata => {
                let duration = known_duration(self.output.duration());
                if let Some(duration) = duration {
                    if let Some(track) = self.playlist.current_mut() {
                        track.duration = duration;
                    }
                    self.save();
                }
                self.emit(PlayerEvent::TrackLoaded {
                    duration: duration.unwrap_or(0.0),
                });
            }
            OutputEvent::Play => {
                self.is_playing = true;
                self.emit(PlayerEvent::Play {
                    index: self.playlist.current_index(),
                });
            }
            OutputEvent::Pause => {
                self.is_playing = false;
                self.emit(PlayerEvent::Pause {
                    index: self.playlist.current_index(),
                });
            }
        }
    }

    // === Queries ===

    /// All tracks in playlist order
    #[must_use]
    pub fn playlist(&self) -> &[Track] {
        self.playlist.tracks()
    }

    /// Get track by ID
    #[must_use]
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.playlist.get_by_id(id)
    }

    /// Playlist length
    #[must_use]
    pub fn len(&self) -> usize {
        self.playlist.len()
    }

    /// Check if the playlist is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playlist.is_empty()
    }

    /// Index of the selected track
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.playlist.current_index()
    }

    /// The selected track
    #[must_use]
    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.current()
    }

    /// Snapshot of the transient player state
    #[must_use]
    pub fn state(&self) -> PlayerState {
        PlayerState {
            current_index: self.playlist.current_index(),
            is_playing: self.is_playing,
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    /// Whether the output last reported playing
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether shuffle is enabled
    #[must_use]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current repeat mode
    #[must_use]
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// Last volume applied to the output
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Position of the selected track, if any
    #[must_use]
    pub fn progress(&self) -> Option<PlaybackProgress> {
        self.playlist.current_index()?;
        Some(PlaybackProgress::new(
            self.output.current_time(),
            self.output.duration(),
        ))
    }

    /// Tracks the last save could only record as metadata
    ///
    /// Non-empty while the saved playlist is missing tracks that are still in
    /// memory; after a restart these need to be added again by the user.
    #[must_use]
    pub fn lost_tracks(&self) -> Vec<TrackMetadata> {
        self.store.lost_tracks()
    }

    /// Player configuration
    #[must_use]
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// The audio output
    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    /// The audio output, mutably
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    // === Internal ===

    fn save(&mut self) {
        let outcome = self.store.save(self.playlist.tracks());
        tracing::trace!("Saved playlist: {:?}", outcome);
    }

    fn emit(&mut self, event: PlayerEvent) {
        let mut from = 0;
        loop {
            let mut commands = PlayerCommands::new();
            let Some(next) = self.events.deliver(from, &event, &mut commands) else {
                break;
            };
            for command in commands {
                self.run_command(command);
            }
            from = next;
        }
    }

    fn run_command(&mut self, command: PlayerCommand) {
        if self.command_depth >= MAX_COMMAND_DEPTH {
            tracing::warn!("Dropping {:?}: subscriber commands nested too deep", command);
            return;
        }
        self.command_depth += 1;
        tracing::debug!("Running subscriber command {:?}", command);

        match command {
            PlayerCommand::PlayTrack(index) => self.play_track(index),
            PlayerCommand::TogglePlay => self.toggle_play(),
            PlayerCommand::Resume => self.resume(),
            PlayerCommand::Pause => self.pause(),
            PlayerCommand::Stop => self.stop(),
            PlayerCommand::Next => self.next(),
            PlayerCommand::Previous => self.previous(),
            PlayerCommand::Seek(percent) => self.seek(percent),
            PlayerCommand::SetVolume(percent) => self.set_volume(percent),
            PlayerCommand::ToggleShuffle => {
                self.toggle_shuffle();
            }
            PlayerCommand::ToggleRepeat => {
                self.toggle_repeat();
            }
            PlayerCommand::SetShuffle(shuffle) => self.set_shuffle(shuffle),
            PlayerCommand::SetRepeat(mode) => self.set_repeat(mode),
            PlayerCommand::RemoveTrack(id) => {
                self.remove_track(&id);
            }
            PlayerCommand::ClearPlaylist => self.clear_playlist(),
        }

        self.command_depth -= 1;
    }

    fn report_playback_error(&mut self, err: PlayerError) {
        tracing::warn!("{}", err);
        self.emit(PlayerEvent::Error {
            message: err.to_string(),
        });
    }
}
