//! Score percentage value object (0-100 scale, fractional).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A score percentage between 0.0 and 100.0 inclusive.
///
/// Fractional values matter here: level thresholds are compared against
/// unrounded percentages, so 79.999 and 80.0 land in different levels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScorePercent(f64);

impl ScorePercent {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new ScorePercent, clamping to the valid range.
    ///
    /// Non-finite inputs clamp to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a ScorePercent, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("percent", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Computes the percentage of `total` out of `max`, zero when `max` is zero.
    pub fn from_ratio(total: u32, max: u32) -> Self {
        if max == 0 {
            return Self::ZERO;
        }
        Self::new(f64::from(total) * 100.0 / f64::from(max))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for ScorePercent {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ScorePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
