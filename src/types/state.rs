use std::fmt;

/// Repeat mode for playlist playback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatMode {
    /// No repeat
    #[default]
    Off,
    /// Repeat current track
    One,
    /// Repeat entire playlist
    All,
}

impl RepeatMode {
    /// The mode that follows this one in the `Off -> One -> All -> Off` cycle
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            Self::Off => Self::One,
            Self::One => Self::All,
            Self::All => Self::Off,
        }
    }

    /// Short lowercase name, as shown to the user
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "none",
            Self::One => "one",
            Self::All => "all",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transient playback state of the player
///
/// Never persisted; rebuilt from defaults on every start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerState {
    /// Index of the selected track (None if nothing is selected)
    pub current_index: Option<usize>,

    /// Mirrors the play/pause state reported by the audio output
    pub is_playing: bool,

    /// Whether shuffle is enabled
    pub shuffle: bool,

    /// Current repeat mode
    pub repeat: RepeatMode,
}
