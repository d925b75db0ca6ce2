//! Two-tier playlist persistence

use std::collections::HashSet;

use super::{KeyValueStore, StorageError};
use crate::types::{Track, TrackId, TrackMetadata};

/// Which record a save ended up writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Full record written under the playlist key
    Full,
    /// Full write failed; metadata-only record written under the fallback key
    MetadataOnly,
    /// Both writes failed; the playlist lives in memory only
    Failed,
}

/// Saves and restores the playlist through a `KeyValueStore`
///
/// Failures never escape: a failed full write degrades to a metadata-only
/// write, and a failed load yields an empty playlist. Both are logged.
pub struct PlaylistStore {
    store: Box<dyn KeyValueStore>,
    playlist_key: String,
    metadata_key: String,
}

impl PlaylistStore {
    /// Wrap a store, using the given keys for the full and fallback records
    pub fn new(
        store: impl KeyValueStore + 'static,
        playlist_key: impl Into<String>,
        metadata_key: impl Into<String>,
    ) -> Self {
        Self {
            store: Box::new(store),
            playlist_key: playlist_key.into(),
            metadata_key: metadata_key.into(),
        }
    }

    /// Persist the whole playlist, degrading to metadata only on failure
    ///
    /// A successful full write discards any earlier fallback record.
    pub fn save(&mut self, tracks: &[Track]) -> SaveOutcome {
        let err = match self.write_full(tracks) {
            Ok(()) => {
                if let Err(e) = self.store.remove(&self.metadata_key) {
                    tracing::warn!("Failed to discard stale playlist metadata: {}", e);
                }
                return SaveOutcome::Full;
            }
            Err(e) => e,
        };
        tracing::warn!(
            "Failed to save playlist ({} tracks): {}; falling back to metadata only",
            tracks.len(),
            err
        );

        match self.write_metadata(tracks) {
            Ok(()) => SaveOutcome::MetadataOnly,
            Err(e) => {
                tracing::warn!("Failed to save playlist metadata: {}", e);
                SaveOutcome::Failed
            }
        }
    }

    /// Restore the playlist; missing or corrupt records yield an empty list
    #[must_use]
    pub fn load(&self) -> Vec<Track> {
        match self.read_full() {
            Ok(tracks) => tracks,
            Err(e) => {
                tracing::warn!("Failed to load playlist: {}", e);
                Vec::new()
            }
        }
    }

    /// Read the metadata-only fallback record, if one was written
    ///
    /// The record lists every track at the time of the failed save, including
    /// ones the full record still holds. See `lost_tracks`.
    #[must_use]
    pub fn load_metadata(&self) -> Vec<TrackMetadata> {
        let raw = match self.store.get(&self.metadata_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read playlist metadata: {}", e);
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse playlist metadata: {}", e);
            Vec::new()
        })
    }

    /// Fallback entries missing from the full record
    ///
    /// These tracks lost their source and need to be added again.
    #[must_use]
    pub fn lost_tracks(&self) -> Vec<TrackMetadata> {
        let saved: HashSet<TrackId> = self.load().into_iter().map(|t| t.id).collect();
        self.load_metadata()
            .into_iter()
            .filter(|m| !saved.contains(&m.id))
            .collect()
    }

    fn write_full(&mut self, tracks: &[Track]) -> Result<(), StorageError> {
        let json = serde_json::to_string(tracks)?;
        self.store.set(&self.playlist_key, &json)
    }

    fn write_metadata(&mut self, tracks: &[Track]) -> Result<(), StorageError> {
        let metadata: Vec<TrackMetadata> = tracks.iter().map(TrackMetadata::from).collect();
        let json = serde_json::to_string(&metadata)?;
        self.store.set(&self.metadata_key, &json)
    }

    fn read_full(&self) -> Result<Vec<Track>, StorageError> {
        match self.store.get(&self.playlist_key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}
