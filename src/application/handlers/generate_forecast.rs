//! GenerateForecastHandler - Runs the forecast engine and persists results.

use std::sync::Arc;

use crate::domain::forecast::{ForecastOutcome, ForecastType, RiskForecastEngine};
use crate::ports::ForecastStore;

/// Command requesting one forecast run.
#[derive(Debug, Clone)]
pub struct GenerateForecastCommand {
    pub forecast_type: ForecastType,
    pub target: String,
    pub horizon_days: u32,
}

/// Handler running the engine and persisting produced forecasts.
///
/// Skipped outcomes persist nothing; degraded forecasts are stored like
/// ready ones so accuracy tracking later covers them too. A failed save is
/// logged and the outcome still returned: the forecast itself is the
/// caller's answer, persistence is bookkeeping.
pub struct GenerateForecastHandler {
    engine: Arc<RiskForecastEngine>,
    store: Arc<dyn ForecastStore>,
}

impl GenerateForecastHandler {
    pub fn new(engine: Arc<RiskForecastEngine>, store: Arc<dyn ForecastStore>) -> Self {
        Self { engine, store }
    }

    pub async fn handle(&self, command: GenerateForecastCommand) -> ForecastOutcome {
        let outcome = self
            .engine
            .generate(command.forecast_type, &command.target, command.horizon_days)
            .await;

        if let Some(forecast) = outcome.forecast() {
            if let Err(err) = self.store.save(forecast).await {
                tracing::warn!(
                    forecast_id = %forecast.id,
                    error = %err,
                    "failed to persist forecast"
                );
            }
        }
        outcome
    }
}
