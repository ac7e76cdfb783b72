//! Forecast module - forward risk estimates from historical score series.
//!
//! A separate, loosely coupled pipeline: it consumes assessment history
//! through the [`crate::ports::RiskHistoryReader`] port and produces
//! forecasts and pattern detections, but never feeds back into
//! gatekeeping.

mod accuracy;
mod anomaly;
mod engine;
mod features;
mod model;
mod types;

pub use accuracy::{accuracy_score, AccuracySummary};
pub use anomaly::AnomalyDetector;
pub use engine::{ForecastSettings, RiskForecastEngine};
pub use features::{latest_features, series_variance, training_set, FeatureRow, TrainingSet};
pub use model::{LinearRegression, ModelSuite, RiskModel, StumpEnsemble};
pub use types::{
    ForecastOutcome, ForecastType, HighRiskSnapshot, RiskFactor, RiskForecast, RiskLevel,
    RiskObservation, RiskPattern, SkipReason,
};
