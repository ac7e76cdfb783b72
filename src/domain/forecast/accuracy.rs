//! Forecast accuracy aggregation.

use serde::{Deserialize, Serialize};

use super::types::ForecastType;

/// Accuracy score for one predicted/actual pair.
///
/// Both values live on the 0-1 probability scale, so the score is simply
/// how close the prediction landed.
pub fn accuracy_score(predicted: f64, actual: f64) -> f64 {
    (1.0 - (predicted - actual).abs()).clamp(0.0, 1.0)
}

/// Aggregated accuracy statistics over a trailing window of forecasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    pub forecast_type: ForecastType,
    pub sample_count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl AccuracySummary {
    /// Aggregates a set of accuracy scores; None when no scores exist.
    pub fn from_scores(forecast_type: ForecastType, scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        let min = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            forecast_type,
            sample_count: scores.len(),
            mean,
            min,
            max,
            std_dev: variance.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_score_rewards_close_predictions() {
        assert!((accuracy_score(0.8, 0.8) - 1.0).abs() < 1e-9);
        assert!((accuracy_score(0.9, 0.1) - 0.2).abs() < 1e-9);
        assert!((accuracy_score(1.0, 0.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn summary_none_for_no_scores() {
        assert!(AccuracySummary::from_scores(ForecastType::UserRisk, &[]).is_none());
    }

    #[test]
    fn summary_aggregates_mean_min_max() {
        let summary =
            AccuracySummary::from_scores(ForecastType::MarketRisk, &[0.5, 0.7, 0.9]).unwrap();
        assert_eq!(summary.sample_count, 3);
        assert!((summary.mean - 0.7).abs() < 1e-9);
        assert!((summary.min - 0.5).abs() < 1e-9);
        assert!((summary.max - 0.9).abs() < 1e-9);
    }

    #[test]
    fn summary_std_dev_is_population() {
        let summary =
            AccuracySummary::from_scores(ForecastType::UserRisk, &[0.4, 0.8]).unwrap();
        assert!((summary.std_dev - 0.2).abs() < 1e-9);
    }
}
