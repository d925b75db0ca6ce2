//! Ordered playlist with a play cursor

use std::collections::HashSet;

use crate::types::{RepeatMode, Track, TrackId};

/// Ordered, id-unique list of tracks plus the current-track cursor
///
/// Insertion order is playback order when shuffle is off.
#[derive(Debug, Default)]
pub struct Playlist {
    /// Playlist items
    items: Vec<Track>,
    /// Currently selected index
    current_index: Option<usize>,
}

impl Playlist {
    /// Create an empty playlist
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a playlist from restored tracks, dropping later duplicates of an id
    #[must_use]
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(tracks.len());
        for track in tracks {
            if seen.insert(track.id.clone()) {
                items.push(track);
            } else {
                tracing::warn!("Dropping duplicate track id {} from restored playlist", track.id);
            }
        }
        Self {
            items,
            current_index: None,
        }
    }

    /// Append a track; returns false if its id is already present
    pub fn add(&mut self, track: Track) -> bool {
        if self.position(&track.id).is_some() {
            return false;
        }
        self.items.push(track);
        true
    }

    /// Remove a track by ID, returning its former index and the track
    ///
    /// A cursor past the removed index is shifted down so it keeps pointing at
    /// the same track. Removing the selected track clears the cursor.
    pub fn remove(&mut self, id: &TrackId) -> Option<(usize, Track)> {
        let index = self.position(id)?;
        let track = self.items.remove(index);

        if let Some(current) = self.current_index {
            if index < current {
                self.current_index = Some(current - 1);
            } else if index == current {
                self.current_index = None;
            }
        }

        Some((index, track))
    }

    /// Clear the playlist
    pub fn clear(&mut self) {
        self.items.clear();
        self.current_index = None;
    }

    /// Get the current track
    #[must_use]
    pub fn current(&self) -> Option<&Track> {
        self.current_index.and_then(|i| self.items.get(i))
    }

    /// Get the current track mutably
    pub fn current_mut(&mut self) -> Option<&mut Track> {
        self.current_index.and_then(|i| self.items.get_mut(i))
    }

    /// Get the current index
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Set current index; out-of-range indices are ignored
    pub fn set_current(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.current_index = Some(index);
            true
        } else {
            false
        }
    }

    /// Deselect the current track
    pub fn clear_current(&mut self) {
        self.current_index = None;
    }

    /// Index that follows the cursor in list order
    ///
    /// With no selection this is the first track. Past the end it wraps to 0
    /// under `RepeatMode::All` and is `None` otherwise.
    #[must_use]
    pub fn next_index(&self, repeat: RepeatMode) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        let next = self.current_index.map_or(0, |i| i + 1);
        if next < self.items.len() {
            Some(next)
        } else if repeat == RepeatMode::All {
            Some(0)
        } else {
            None
        }
    }

    /// Index that precedes the cursor in list order
    ///
    /// Before the start it wraps to the last track under `RepeatMode::All`
    /// and clamps to 0 otherwise. With no selection the cursor counts as
    /// being before the start.
    #[must_use]
    pub fn previous_index(&self, repeat: RepeatMode) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        match self.current_index.and_then(|i| i.checked_sub(1)) {
            Some(prev) => Some(prev),
            None if repeat == RepeatMode::All => Some(self.items.len() - 1),
            None => Some(0),
        }
    }

    /// Get playlist length
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if playlist is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get all tracks in order
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.items
    }

    /// Get track by index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.items.get(index)
    }

    /// Get track by ID
    #[must_use]
    pub fn get_by_id(&self, id: &TrackId) -> Option<&Track> {
        self.items.iter().find(|track| &track.id == id)
    }

    /// Find the index of a track by ID
    #[must_use]
    pub fn position(&self, id: &TrackId) -> Option<usize> {
        self.items.iter().position(|track| &track.id == id)
    }
}
