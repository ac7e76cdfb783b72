//! The risk forecast engine: history in, forecasts and patterns out.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::Mutex;

use super::anomaly::AnomalyDetector;
use super::features::{self, WINDOW};
use super::model::ModelSuite;
use super::types::{
    ForecastOutcome, ForecastType, HighRiskSnapshot, RiskFactor, RiskForecast, RiskPattern,
    SkipReason,
};
use crate::domain::foundation::{ForecastId, Timestamp};
use crate::ports::RiskHistoryReader;

/// Tuning knobs for the forecast engine, sourced from configuration.
#[derive(Debug, Clone, Copy)]
pub struct ForecastSettings {
    /// Minimum history points per forecast type.
    pub min_points_user: usize,
    pub min_points_industry: usize,
    pub min_points_market: usize,
    /// Most history points fetched per run.
    pub max_series_points: usize,
    /// Share of feature rows used for fitting (chronological prefix).
    pub train_fraction: f64,
    /// Contamination rate for the anomaly detector.
    pub contamination: f64,
    /// Flagged clusters below this size are ignored.
    pub min_cluster_size: usize,
    /// Share of a cluster a factor must appear in to be "common".
    pub common_factor_threshold: f64,
}

impl ForecastSettings {
    /// Minimum points for a forecast type.
    pub fn min_points(&self, forecast_type: ForecastType) -> usize {
        match forecast_type {
            ForecastType::UserRisk => self.min_points_user,
            ForecastType::IndustryRisk => self.min_points_industry,
            ForecastType::MarketRisk => self.min_points_market,
        }
    }
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            min_points_user: 5,
            min_points_industry: 7,
            min_points_market: 10,
            max_series_points: 365,
            train_fraction: 0.8,
            contamination: 0.1,
            min_cluster_size: 3,
            common_factor_threshold: 0.5,
        }
    }
}

/// Generates forward risk estimates and flags anomalous factor clusters.
///
/// The engine owns its model suite outright, constructed at init and
/// injectable, never pulled from ambient state. Every public method is
/// total: storage failures and missing numeric backends come back as
/// tagged outcomes or empty lists, never as errors or panics, because
/// unrelated request paths sit above these calls.
pub struct RiskForecastEngine {
    history: Arc<dyn RiskHistoryReader>,
    suite: Mutex<ModelSuite>,
    detector: AnomalyDetector,
    settings: ForecastSettings,
}

impl RiskForecastEngine {
    /// Creates an engine over the given history reader and model suite.
    pub fn new(
        history: Arc<dyn RiskHistoryReader>,
        suite: ModelSuite,
        settings: ForecastSettings,
    ) -> Self {
        Self {
            history,
            suite: Mutex::new(suite),
            detector: AnomalyDetector::new(settings.contamination),
            settings,
        }
    }

    /// Generates a risk forecast for one target entity.
    ///
    /// Model fitting is CPU-bound and storage reads block; run this off
    /// latency-sensitive paths and impose timeouts at the call site.
    pub async fn generate(
        &self,
        forecast_type: ForecastType,
        target: &str,
        horizon_days: u32,
    ) -> ForecastOutcome {
        let series = match self
            .history
            .score_series(forecast_type, target, self.settings.max_series_points)
            .await
        {
            Ok(series) => series,
            Err(err) => {
                tracing::warn!(%forecast_type, entity = target, error = %err, "history read failed");
                return ForecastOutcome::Skipped(SkipReason::StorageUnavailable);
            }
        };

        let required = self.settings.min_points(forecast_type);
        if series.len() < required {
            return ForecastOutcome::Skipped(SkipReason::InsufficientHistory {
                required,
                available: series.len(),
            });
        }

        let mut suite = self.suite.lock().await;
        let Some(model) = suite.model_for(forecast_type) else {
            tracing::debug!(%forecast_type, "model suite unavailable, degrading to neutral forecast");
            return ForecastOutcome::Degraded(self.neutral_forecast(
                forecast_type,
                target,
                horizon_days,
            ));
        };

        // Lag-7 features need a full window plus a target; shorter series
        // clear the configured minimum but still cannot be fit.
        let training = features::training_set(&series);
        let (train, _holdout) = training.chronological_split(self.settings.train_fraction);
        let Some(latest) = features::latest_features(&series) else {
            return ForecastOutcome::Skipped(SkipReason::InsufficientHistory {
                required: WINDOW + 2,
                available: series.len(),
            });
        };
        if train.is_empty() {
            return ForecastOutcome::Skipped(SkipReason::InsufficientHistory {
                required: WINDOW + 2,
                available: series.len(),
            });
        }

        model.fit(&train);
        let raw = model.predict(&latest);
        let probability = (raw / 100.0).clamp(0.0, 1.0);

        let n = series.len();
        let variance = features::series_variance(&series);
        let confidence = ((n as f64 / 50.0) * (1.0 / (1.0 + variance))).clamp(0.1, 1.0);

        let recent: Vec<f64> = series
            .iter()
            .rev()
            .take(WINDOW)
            .rev()
            .map(|o| o.score)
            .collect();
        let supporting_data = json!({
            "recent_scores": recent,
            "series_points": n,
            "series_variance": variance,
            "raw_prediction": raw,
            "train_rows": train.len(),
        });

        ForecastOutcome::Ready(RiskForecast {
            id: ForecastId::new(),
            forecast_type,
            target: target.to_string(),
            horizon_days,
            risk_probability: probability,
            confidence,
            supporting_data,
            model_version: model.version().to_string(),
            created_at: Timestamp::now(),
            actual_outcome: None,
            accuracy: None,
        })
    }

    /// Detects emerging risk patterns among recent high-risk users.
    ///
    /// Returns an empty list when storage fails, the numeric backend is
    /// unavailable, or no flagged cluster reaches the minimum size.
    pub async fn detect_patterns(&self, window_days: u32) -> Vec<RiskPattern> {
        let snapshots = match self.history.high_risk_snapshots(window_days).await {
            Ok(snapshots) => snapshots,
            Err(err) => {
                tracing::warn!(window_days, error = %err, "high-risk snapshot read failed");
                return Vec::new();
            }
        };

        if self.suite.lock().await.is_disabled() {
            tracing::debug!("model suite unavailable, skipping pattern detection");
            return Vec::new();
        }

        let elevated: Vec<&HighRiskSnapshot> =
            snapshots.iter().filter(|s| s.level.is_elevated()).collect();
        if elevated.len() < self.settings.min_cluster_size {
            return Vec::new();
        }

        let matrix: Vec<Vec<f64>> = elevated.iter().map(|s| s.feature_vector()).collect();
        let flagged = self.detector.flag_outliers(&matrix);
        if flagged.len() < self.settings.min_cluster_size {
            return Vec::new();
        }

        let cluster: Vec<&HighRiskSnapshot> = flagged.iter().map(|&i| elevated[i]).collect();
        let common_factors = common_factors(&cluster, self.settings.common_factor_threshold);

        vec![RiskPattern {
            member_user_ids: cluster.iter().map(|s| s.user_id.clone()).collect(),
            common_factors,
            detected_at: Timestamp::now(),
        }]
    }

    fn neutral_forecast(
        &self,
        forecast_type: ForecastType,
        target: &str,
        horizon_days: u32,
    ) -> RiskForecast {
        RiskForecast {
            id: ForecastId::new(),
            forecast_type,
            target: target.to_string(),
            horizon_days,
            risk_probability: 0.5,
            confidence: 0.1,
            supporting_data: json!({ "degraded": true }),
            model_version: "unavailable".to_string(),
            created_at: Timestamp::now(),
            actual_outcome: None,
            accuracy: None,
        }
    }
}

/// Factors present in at least `threshold` of the cluster.
fn common_factors(cluster: &[&HighRiskSnapshot], threshold: f64) -> Vec<RiskFactor> {
    if cluster.is_empty() {
        return Vec::new();
    }
    let n = cluster.len() as f64;
    RiskFactor::ALL
        .into_iter()
        .filter(|factor| {
            let count = cluster.iter().filter(|s| s.factors.contains(factor)).count();
            count as f64 / n >= threshold
        })
        .collect()
}
