//! Volume — a validated playback level in the unit range.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Playback volume, normalised to `0.0..=1.0`.
///
/// The external platform exposes zone volume as a fraction of full scale;
/// adjustments happen in steps of [`STEP`](Self::STEP).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    /// Default level applied when a request does not specify one.
    pub const DEFAULT: Self = Self(0.5);

    /// Granularity of a single up/down adjustment.
    pub const STEP: f64 = 0.01;

    /// Validate and wrap a raw level.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::VolumeOutOfRange`] when the value is not
    /// within `0.0..=1.0` (NaN included).
    pub fn try_new(level: f64) -> Result<Self, ValidationError> {
        if (0.0..=1.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(ValidationError::VolumeOutOfRange(level))
        }
    }

    /// The raw level as a fraction of full scale.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// One step louder, saturating at full scale.
    #[must_use]
    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP).min(1.0))
    }

    /// One step quieter, saturating at silence.
    #[must_use]
    pub fn step_down(self) -> Self {
        Self((self.0 - Self::STEP).max(0.0))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Volume {
    type Error = ValidationError;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        Self::try_new(level)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl std::fmt::Display for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
