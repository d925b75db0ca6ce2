use std::time::Duration;

use crate::control::volume::Volume;
use crate::types::RepeatMode;

/// Storage key holding the full playlist record
pub const DEFAULT_PLAYLIST_KEY: &str = "musicPlaylist";

/// Storage key holding the metadata-only fallback record
pub const DEFAULT_METADATA_KEY: &str = "musicPlaylistMeta";

/// Configuration for playlist player behavior
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Key of the full playlist record (default: `musicPlaylist`)
    pub playlist_key: String,

    /// Key of the metadata-only fallback record (default: `musicPlaylistMeta`)
    pub metadata_key: String,

    /// Elapsed time after which `previous()` restarts the current track
    /// instead of moving back (default: 3 seconds)
    pub restart_threshold: Duration,

    /// Volume applied to the output at construction (default: 75%)
    pub initial_volume: Volume,

    /// Whether shuffle starts enabled (default: false)
    pub initial_shuffle: bool,

    /// Starting repeat mode (default: off)
    pub initial_repeat: RepeatMode,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playlist_key: DEFAULT_PLAYLIST_KEY.to_string(),
            metadata_key: DEFAULT_METADATA_KEY.to_string(),
            restart_threshold: Duration::from_secs(3),
            initial_volume: Volume::DEFAULT,
            initial_shuffle: false,
            initial_repeat: RepeatMode::Off,
        }
    }
}

impl PlayerConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> PlayerConfigBuilder {
        PlayerConfigBuilder::default()
    }
}

/// Builder for `PlayerConfig`
#[derive(Debug, Clone, Default)]
pub struct PlayerConfigBuilder {
    config: PlayerConfig,
}

impl PlayerConfigBuilder {
    /// Set the storage keys for the full and metadata-only records
    #[must_use]
    pub fn storage_keys(mut self, playlist: impl Into<String>, metadata: impl Into<String>) -> Self {
        self.config.playlist_key = playlist.into();
        self.config.metadata_key = metadata.into();
        self
    }

    /// Set the scrub-back threshold used by `previous()`
    #[must_use]
    pub fn restart_threshold(mut self, threshold: Duration) -> Self {
        self.config.restart_threshold = threshold;
        self
    }

    /// Set the initial output volume
    #[must_use]
    pub fn initial_volume(mut self, volume: Volume) -> Self {
        self.config.initial_volume = volume;
        self
    }

    /// Start with shuffle enabled or disabled
    #[must_use]
    pub fn shuffle(mut self, enabled: bool) -> Self {
        self.config.initial_shuffle = enabled;
        self
    }

    /// Set the starting repeat mode
    #[must_use]
    pub fn repeat(mut self, mode: RepeatMode) -> Self {
        self.config.initial_repeat = mode;
        self
    }

    /// Build the config
    #[must_use]
    pub fn build(self) -> PlayerConfig {
        self.config
    }
}
