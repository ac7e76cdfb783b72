//! In-memory risk history adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::forecast::{ForecastType, HighRiskSnapshot, RiskObservation};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::RiskHistoryReader;

/// In-memory store of score series and high-risk snapshots.
///
/// Series are kept per (forecast type, target) and served oldest-first,
/// trimmed from the back of the series the way a SQL
/// `ORDER BY observed_at DESC LIMIT n` read would be.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRiskHistory {
    series: Arc<RwLock<HashMap<(ForecastType, String), Vec<RiskObservation>>>>,
    snapshots: Arc<RwLock<Vec<HighRiskSnapshot>>>,
}

impl InMemoryRiskHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an observation to an entity's series.
    pub async fn push_observation(
        &self,
        forecast_type: ForecastType,
        target: impl Into<String>,
        observation: RiskObservation,
    ) {
        let mut series = self.series.write().await;
        let entry = series.entry((forecast_type, target.into())).or_default();
        entry.push(observation);
        entry.sort_by(|a, b| a.observed_at.cmp(&b.observed_at));
    }

    /// Records a high-risk user snapshot.
    pub async fn push_snapshot(&self, snapshot: HighRiskSnapshot) {
        self.snapshots.write().await.push(snapshot);
    }
}

#[async_trait]
impl RiskHistoryReader for InMemoryRiskHistory {
    async fn score_series(
        &self,
        forecast_type: ForecastType,
        target: &str,
        max_points: usize,
    ) -> Result<Vec<RiskObservation>, DomainError> {
        let series = self.series.read().await;
        let full = series
            .get(&(forecast_type, target.to_string()))
            .cloned()
            .unwrap_or_default();
        let skip = full.len().saturating_sub(max_points);
        Ok(full.into_iter().skip(skip).collect())
    }

    async fn high_risk_snapshots(
        &self,
        window_days: u32,
    ) -> Result<Vec<HighRiskSnapshot>, DomainError> {
        let cutoff = Timestamp::now().minus_days(i64::from(window_days));
        let snapshots = self.snapshots.read().await;
        Ok(snapshots
            .iter()
            .filter(|s| s.level.is_elevated() && s.observed_at.is_after(&cutoff))
            .cloned()
            .collect())
    }
}
