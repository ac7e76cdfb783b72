//! DetectRiskPatternsHandler - Surfaces emerging risk-factor clusters.

use std::sync::Arc;

use crate::domain::forecast::{RiskForecastEngine, RiskPattern};

/// Query scanning recent high-risk users for anomalous factor clusters.
#[derive(Debug, Clone)]
pub struct DetectRiskPatternsQuery {
    pub window_days: u32,
}

/// Handler wrapping the engine's pattern detection.
pub struct DetectRiskPatternsHandler {
    engine: Arc<RiskForecastEngine>,
}

impl DetectRiskPatternsHandler {
    pub fn new(engine: Arc<RiskForecastEngine>) -> Self {
        Self { engine }
    }

    /// Never fails; degraded or unreadable states come back empty.
    pub async fn handle(&self, query: DetectRiskPatternsQuery) -> Vec<RiskPattern> {
        self.engine.detect_patterns(query.window_days).await
    }
}
