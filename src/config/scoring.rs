//! Scoring configuration (level thresholds)

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::LevelThresholds;

/// Scoring thresholds section
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    /// Minimum percentage for the Intermediate level
    #[serde(default = "default_intermediate_min")]
    pub intermediate_min: f64,

    /// Minimum percentage for the Advanced level
    #[serde(default = "default_advanced_min")]
    pub advanced_min: f64,
}

fn default_intermediate_min() -> f64 {
    60.0
}

fn default_advanced_min() -> f64 {
    80.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            intermediate_min: default_intermediate_min(),
            advanced_min: default_advanced_min(),
        }
    }
}

impl ScoringConfig {
    /// Validate threshold ranges and ordering
    pub fn validate(&self) -> Result<(), ValidationError> {
        for value in [self.intermediate_min, self.advanced_min] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ValidationError::ThresholdOutOfRange);
            }
        }
        if self.intermediate_min >= self.advanced_min {
            return Err(ValidationError::ThresholdOrderInverted);
        }
        Ok(())
    }

    /// Convert into the domain threshold value object
    pub fn thresholds(&self) -> Result<LevelThresholds, ValidationError> {
        self.validate()?;
        LevelThresholds::new(self.intermediate_min, self.advanced_min)
            .map_err(|_| ValidationError::ThresholdOutOfRange)
    }
}
