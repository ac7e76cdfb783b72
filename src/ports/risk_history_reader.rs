//! Read port for historical risk data consumed by the forecast engine.

use async_trait::async_trait;

use crate::domain::forecast::{ForecastType, HighRiskSnapshot, RiskObservation};
use crate::domain::foundation::DomainError;

/// Port for fetching historical risk-score series and high-risk snapshots.
///
/// Series come back chronologically ordered, oldest first. Implementations
/// back onto the assessment history tables; the engine only ever reads.
#[async_trait]
pub trait RiskHistoryReader: Send + Sync {
    /// Returns up to `max_points` of the entity's score history,
    /// chronologically ordered.
    async fn score_series(
        &self,
        forecast_type: ForecastType,
        target: &str,
        max_points: usize,
    ) -> Result<Vec<RiskObservation>, DomainError>;

    /// Returns high/critical risk user snapshots observed within the
    /// trailing window.
    async fn high_risk_snapshots(
        &self,
        window_days: u32,
    ) -> Result<Vec<HighRiskSnapshot>, DomainError>;
}
