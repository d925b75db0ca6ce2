use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Unique identifier for a track
///
/// Generated from the wall clock in milliseconds plus a random tiebreaker, so
/// two tracks added within the same millisecond still get distinct ids and ids
/// stay unique across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Generate a new unique ID
    #[must_use]
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let tiebreak: u32 = rand::thread_rng().r#gen();
        Self(format!("{millis:x}-{tiebreak:08x}"))
    }

    /// Borrow the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the audio for a track comes from
///
/// Persisted as either a `"path"` or a `"data"` key on the track record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackSource {
    /// Direct filesystem path granted by the host
    #[serde(rename = "path")]
    Path(PathBuf),
    /// Base64 data URI holding the whole encoded file
    #[serde(rename = "data")]
    Embedded(String),
}

impl TrackSource {
    /// Whether this source is a filesystem path
    #[must_use]
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Whether this source carries the file bytes inline
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(_))
    }
}

/// One playable entry in the playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique identifier
    pub id: TrackId,

    /// Display title (file name without extension)
    pub name: String,

    /// Original file name
    pub file_name: String,

    /// Audio source
    #[serde(flatten)]
    pub source: TrackSource,

    /// Duration in seconds, 0 until the output reports metadata
    #[serde(default)]
    pub duration: f64,
}

impl Track {
    /// Create a new track with a freshly generated id
    #[must_use]
    pub fn new(file_name: impl Into<String>, source: TrackSource) -> Self {
        let file_name = file_name.into();
        Self {
            id: TrackId::generate(),
            name: display_name(&file_name),
            file_name,
            source,
            duration: 0.0,
        }
    }

    /// Create a track that plays straight from a filesystem path
    #[must_use]
    pub fn from_path(file_name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::new(file_name, TrackSource::Path(path.as_ref().to_path_buf()))
    }

    /// Create a track whose bytes are embedded as a data URI
    #[must_use]
    pub fn embedded(file_name: impl Into<String>, data_uri: impl Into<String>) -> Self {
        Self::new(file_name, TrackSource::Embedded(data_uri.into()))
    }

    /// Builder method to set duration
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }
}

/// Metadata-only projection of a track, used by the fallback record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackMetadata {
    /// Unique identifier
    pub id: TrackId,
    /// Display title
    pub name: String,
    /// Original file name
    pub file_name: String,
}

impl From<&Track> for TrackMetadata {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            name: track.name.clone(),
            file_name: track.file_name.clone(),
        }
    }
}

/// Strip the final extension from a file name.
///
/// `"song.mp3"` becomes `"song"`; a trailing dot or a dot inside a directory
/// component is left alone.
#[must_use]
pub fn display_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) => {
            let ext = &file_name[dot + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name.to_string()
            } else {
                file_name[..dot].to_string()
            }
        }
        None => file_name.to_string(),
    }
}
