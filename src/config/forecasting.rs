//! Forecasting configuration (history minimums, anomaly tuning)

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::forecast::ForecastSettings;

/// Forecasting section
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastingConfig {
    /// Minimum history points for user-risk forecasts
    #[serde(default = "default_min_points_user")]
    pub min_points_user: usize,

    /// Minimum history points for industry-risk forecasts
    #[serde(default = "default_min_points_industry")]
    pub min_points_industry: usize,

    /// Minimum history points for market-risk forecasts
    #[serde(default = "default_min_points_market")]
    pub min_points_market: usize,

    /// Most history points fetched per forecast run
    #[serde(default = "default_max_series_points")]
    pub max_series_points: usize,

    /// Chronological share of feature rows used for fitting
    #[serde(default = "default_train_fraction")]
    pub train_fraction: f64,

    /// Contamination rate for anomaly detection
    #[serde(default = "default_contamination")]
    pub contamination: f64,

    /// Minimum flagged cluster size treated as a pattern
    #[serde(default = "default_min_cluster_size")]
    pub min_cluster_size: usize,

    /// Trailing window (in forecasts) for accuracy aggregation
    #[serde(default = "default_accuracy_window")]
    pub accuracy_window: usize,
}

fn default_min_points_user() -> usize {
    5
}

fn default_min_points_industry() -> usize {
    7
}

fn default_min_points_market() -> usize {
    10
}

fn default_max_series_points() -> usize {
    365
}

fn default_train_fraction() -> f64 {
    0.8
}

fn default_contamination() -> f64 {
    0.1
}

fn default_min_cluster_size() -> usize {
    3
}

fn default_accuracy_window() -> usize {
    50
}

impl Default for ForecastingConfig {
    fn default() -> Self {
        Self {
            min_points_user: default_min_points_user(),
            min_points_industry: default_min_points_industry(),
            min_points_market: default_min_points_market(),
            max_series_points: default_max_series_points(),
            train_fraction: default_train_fraction(),
            contamination: default_contamination(),
            min_cluster_size: default_min_cluster_size(),
            accuracy_window: default_accuracy_window(),
        }
    }
}

impl ForecastingConfig {
    /// Validate numeric bounds
    pub fn validate(&self) -> Result<(), ValidationError> {
        for min in [
            self.min_points_user,
            self.min_points_industry,
            self.min_points_market,
        ] {
            if min < 2 {
                return Err(ValidationError::MinimumHistoryTooSmall);
            }
        }
        if !(0.01..=0.5).contains(&self.contamination) {
            return Err(ValidationError::InvalidContamination);
        }
        if !(0.1..=0.95).contains(&self.train_fraction) {
            return Err(ValidationError::InvalidTrainFraction);
        }
        if self.min_cluster_size < 2 {
            return Err(ValidationError::ClusterSizeTooSmall);
        }
        if self.accuracy_window == 0 {
            return Err(ValidationError::EmptyAccuracyWindow);
        }
        Ok(())
    }

    /// Convert into the engine's settings value
    pub fn settings(&self) -> Result<ForecastSettings, ValidationError> {
        self.validate()?;
        Ok(ForecastSettings {
            min_points_user: self.min_points_user,
            min_points_industry: self.min_points_industry,
            min_points_market: self.min_points_market,
            max_series_points: self.max_series_points,
            train_fraction: self.train_fraction,
            contamination: self.contamination,
            min_cluster_size: self.min_cluster_size,
            common_factor_threshold: 0.5,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(ForecastingConfig::default().validate().is_ok());
    }

    #[test]
    fn default_minimums_fall_in_spec_band() {
        let config = ForecastingConfig::default();
        for min in [
            config.min_points_user,
            config.min_points_industry,
            config.min_points_market,
        ] {
            assert!((5..=10).contains(&min));
        }
    }

    #[test]
    fn rejects_bad_contamination() {
        let config = ForecastingConfig {
            contamination: 0.9,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidContamination)
        ));
    }

    #[test]
    fn rejects_tiny_history_minimum() {
        let config = ForecastingConfig {
            min_points_user: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MinimumHistoryTooSmall)
        ));
    }

    #[test]
    fn settings_mirror_config() {
        let settings = ForecastingConfig::default().settings().unwrap();
        assert_eq!(settings.min_points_market, 10);
        assert_eq!(settings.contamination, 0.1);
        assert_eq!(settings.min_cluster_size, 3);
    }
}
