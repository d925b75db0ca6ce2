//! Playback position reporting

/// Playback progress information for state reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackProgress {
    /// Current position in seconds
    pub position_secs: f64,
    /// Total duration in seconds (None until the output reports metadata)
    pub duration_secs: Option<f64>,
}

impl PlaybackProgress {
    /// Build progress from raw output readings
    ///
    /// Durations that are missing, non-finite or not positive are treated as unknown.
    #[must_use]
    pub fn new(position_secs: f64, duration_secs: Option<f64>) -> Self {
        Self {
            position_secs,
            duration_secs: known_duration(duration_secs),
        }
    }

    /// Get progress as percentage (0.0 - 100.0), 0.0 while the duration is unknown
    #[must_use]
    pub fn percent(&self) -> f64 {
        match self.duration_secs {
            Some(duration) => self.position_secs / duration * 100.0,
            None => 0.0,
        }
    }

    /// Get remaining time in seconds
    #[must_use]
    pub fn remaining_secs(&self) -> Option<f64> {
        self.duration_secs
            .map(|duration| (duration - self.position_secs).max(0.0))
    }
}

/// Filter a raw duration reading down to a usable value
#[must_use]
pub fn known_duration(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}

/// Format seconds as `m:ss`
///
/// Negative and non-finite input renders as `0:00`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite and non-negative"
)]
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
