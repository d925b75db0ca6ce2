use thiserror::Error;

/// Errors that can occur during playlist operations
#[derive(Debug, Error)]
pub enum PlayerError {
    // ===== Input Errors =====
    /// A user-selected file could not be read into memory
    #[error("failed to read {file_name}: {message}")]
    ReadError {
        /// Name of the file that failed to read
        file_name: String,
        /// Message reported by the underlying read
        message: String,
    },

    /// An embedded payload is not a well-formed base64 data URI
    #[error("invalid data URI: {reason}")]
    InvalidDataUri {
        /// Why the payload was rejected
        reason: String,
    },

    // ===== Playback Errors =====
    /// The audio output refused to start playback
    #[error("playback error: {message}")]
    PlaybackError {
        /// Description of the error
        message: String,
    },
}

impl PlayerError {
    /// Check if this error came from reading a file handle
    #[must_use]
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::ReadError { .. })
    }

    /// Check if this error came from the audio output
    #[must_use]
    pub fn is_playback_error(&self) -> bool {
        matches!(self, Self::PlaybackError { .. })
    }
}

/// Result type alias for playlist operations
pub type Result<T> = std::result::Result<T, PlayerError>;
