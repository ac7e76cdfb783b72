//! Storage port for persisted risk forecasts and their accuracy.

use async_trait::async_trait;

use crate::domain::forecast::{ForecastType, RiskForecast};
use crate::domain::foundation::{DomainError, ForecastId};

/// Port for persisting forecasts and recording later outcomes.
#[async_trait]
pub trait ForecastStore: Send + Sync {
    /// Persists a freshly generated forecast.
    async fn save(&self, forecast: &RiskForecast) -> Result<(), DomainError>;

    /// Returns a stored forecast by id.
    async fn get(&self, id: &ForecastId) -> Result<Option<RiskForecast>, DomainError>;

    /// Records the actual outcome and accuracy for a forecast.
    ///
    /// Fails with `ForecastNotFound` for unknown ids and
    /// `ForecastAlreadyScored` when an outcome is already recorded.
    async fn record_outcome(
        &self,
        id: &ForecastId,
        actual_outcome: f64,
        accuracy: f64,
    ) -> Result<(), DomainError>;

    /// Returns the most recent outcome-scored forecasts of a type,
    /// newest first, up to `limit`.
    async fn recent_scored(
        &self,
        forecast_type: ForecastType,
        limit: usize,
    ) -> Result<Vec<RiskForecast>, DomainError>;
}
