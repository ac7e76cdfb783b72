//! RecordForecastOutcomeHandler - Matches forecasts against actual outcomes.

use std::sync::Arc;

use crate::domain::forecast::accuracy_score;
use crate::domain::foundation::{DomainError, ErrorCode, ForecastId};
use crate::ports::ForecastStore;

/// Command recording the observed outcome for a stored forecast.
#[derive(Debug, Clone)]
pub struct RecordForecastOutcomeCommand {
    pub forecast_id: ForecastId,
    /// Observed outcome on the 0-1 probability scale.
    pub actual_outcome: f64,
}

/// Result carrying the computed accuracy.
#[derive(Debug, Clone)]
pub struct RecordForecastOutcomeResult {
    pub accuracy: f64,
}

/// Handler computing and persisting forecast accuracy.
pub struct RecordForecastOutcomeHandler {
    store: Arc<dyn ForecastStore>,
}

impl RecordForecastOutcomeHandler {
    pub fn new(store: Arc<dyn ForecastStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: RecordForecastOutcomeCommand,
    ) -> Result<RecordForecastOutcomeResult, DomainError> {
        if !(0.0..=1.0).contains(&command.actual_outcome) {
            return Err(DomainError::validation(
                "actual_outcome",
                "outcome must be a probability between 0.0 and 1.0",
            ));
        }

        let forecast = self
            .store
            .get(&command.forecast_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ForecastNotFound,
                    format!("forecast {} not found", command.forecast_id),
                )
            })?;

        let accuracy = accuracy_score(forecast.risk_probability, command.actual_outcome);
        self.store
            .record_outcome(&command.forecast_id, command.actual_outcome, accuracy)
            .await?;

        Ok(RecordForecastOutcomeResult { accuracy })
    }
}
