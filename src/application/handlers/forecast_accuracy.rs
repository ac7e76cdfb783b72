//! ForecastAccuracyHandler - Aggregates accuracy over a trailing window.

use std::sync::Arc;

use crate::domain::forecast::{AccuracySummary, ForecastType};
use crate::domain::foundation::DomainError;
use crate::ports::ForecastStore;

/// Query for aggregate accuracy of a forecast type.
#[derive(Debug, Clone)]
pub struct ForecastAccuracyQuery {
    pub forecast_type: ForecastType,
    /// Trailing window size in forecasts.
    pub window: usize,
}

/// Handler aggregating stored accuracy scores.
pub struct ForecastAccuracyHandler {
    store: Arc<dyn ForecastStore>,
}

impl ForecastAccuracyHandler {
    pub fn new(store: Arc<dyn ForecastStore>) -> Self {
        Self { store }
    }

    /// Returns None when no scored forecasts exist in the window.
    pub async fn handle(
        &self,
        query: ForecastAccuracyQuery,
    ) -> Result<Option<AccuracySummary>, DomainError> {
        let recent = self
            .store
            .recent_scored(query.forecast_type, query.window)
            .await?;
        let scores: Vec<f64> = recent.iter().filter_map(|f| f.accuracy).collect();
        Ok(AccuracySummary::from_scores(query.forecast_type, &scores))
    }
}
