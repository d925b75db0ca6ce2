//! Output volume level

/// Volume level (0.0 = silent, 1.0 = max)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Minimum volume (silent)
    pub const MIN: Self = Self(0.0);
    /// Maximum volume
    pub const MAX: Self = Self(1.0);
    /// Default volume (75%)
    pub const DEFAULT: Self = Self(0.75);

    /// Create a new volume level, clamped to `0.0..=1.0`
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self::MIN;
        }
        Self(level.clamp(0.0, 1.0))
    }

    /// Get as f32 (0.0 - 1.0)
    #[must_use]
    pub fn as_f32(&self) -> f32 {
        self.0
    }

    /// Get as percentage (0 - 100)
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Volume percentage fits in u8"
    )]
    pub fn as_percent(&self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    /// Create from a percentage, mapped linearly onto `0.0..=1.0`
    ///
    /// Out-of-range input is clamped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, reason = "percent / 100 fits in f32")]
    pub fn from_percent(percent: f64) -> Self {
        Self::new((percent / 100.0) as f32)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f32> for Volume {
    fn from(v: f32) -> Self {
        Self::new(v)
    }
}
