//! In-memory forecast store adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::forecast::{ForecastType, RiskForecast};
use crate::domain::foundation::{DomainError, ErrorCode, ForecastId};
use crate::ports::ForecastStore;

/// In-memory store of generated forecasts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForecastStore {
    forecasts: Arc<RwLock<HashMap<ForecastId, RiskForecast>>>,
}

impl InMemoryForecastStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored forecasts (useful for tests).
    pub async fn forecast_count(&self) -> usize {
        self.forecasts.read().await.len()
    }
}

#[async_trait]
impl ForecastStore for InMemoryForecastStore {
    async fn save(&self, forecast: &RiskForecast) -> Result<(), DomainError> {
        self.forecasts
            .write()
            .await
            .insert(forecast.id, forecast.clone());
        Ok(())
    }

    async fn get(&self, id: &ForecastId) -> Result<Option<RiskForecast>, DomainError> {
        Ok(self.forecasts.read().await.get(id).cloned())
    }

    async fn record_outcome(
        &self,
        id: &ForecastId,
        actual_outcome: f64,
        accuracy: f64,
    ) -> Result<(), DomainError> {
        let mut forecasts = self.forecasts.write().await;
        let forecast = forecasts.get_mut(id).ok_or_else(|| {
            DomainError::new(ErrorCode::ForecastNotFound, format!("forecast {id} not found"))
        })?;
        if forecast.actual_outcome.is_some() {
            return Err(DomainError::new(
                ErrorCode::ForecastAlreadyScored,
                format!("forecast {id} already has an outcome"),
            ));
        }
        forecast.actual_outcome = Some(actual_outcome);
        forecast.accuracy = Some(accuracy);
        Ok(())
    }

    async fn recent_scored(
        &self,
        forecast_type: ForecastType,
        limit: usize,
    ) -> Result<Vec<RiskForecast>, DomainError> {
        let forecasts = self.forecasts.read().await;
        let mut scored: Vec<RiskForecast> = forecasts
            .values()
            .filter(|f| f.forecast_type == forecast_type && f.accuracy.is_some())
            .cloned()
            .collect();
        scored.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        scored.truncate(limit);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use serde_json::json;

    fn forecast(forecast_type: ForecastType, created_at: Timestamp) -> RiskForecast {
        RiskForecast {
            id: ForecastId::new(),
            forecast_type,
            target: "t".into(),
            horizon_days: 30,
            risk_probability: 0.6,
            confidence: 0.5,
            supporting_data: json!({}),
            model_version: "test".into(),
            created_at,
            actual_outcome: None,
            accuracy: None,
        }
    }

    #[tokio::test]
    async fn save_and_get_round_trip() {
        let store = InMemoryForecastStore::new();
        let f = forecast(ForecastType::UserRisk, Timestamp::now());
        store.save(&f).await.unwrap();

        assert_eq!(store.get(&f.id).await.unwrap(), Some(f));
    }

    #[tokio::test]
    async fn record_outcome_fills_accuracy_once() {
        let store = InMemoryForecastStore::new();
        let f = forecast(ForecastType::UserRisk, Timestamp::now());
        store.save(&f).await.unwrap();

        store.record_outcome(&f.id, 0.8, 0.8).await.unwrap();
        let stored = store.get(&f.id).await.unwrap().unwrap();
        assert_eq!(stored.actual_outcome, Some(0.8));
        assert_eq!(stored.accuracy, Some(0.8));

        let second = store.record_outcome(&f.id, 0.2, 0.2).await;
        assert!(matches!(
            second,
            Err(DomainError {
                code: ErrorCode::ForecastAlreadyScored,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn record_outcome_unknown_id_fails() {
        let store = InMemoryForecastStore::new();
        let result = store.record_outcome(&ForecastId::new(), 0.5, 0.5).await;
        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::ForecastNotFound,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn recent_scored_filters_type_and_orders_newest_first() {
        let store = InMemoryForecastStore::new();
        let now = Timestamp::now();

        let old = forecast(ForecastType::UserRisk, now.minus_days(2));
        let new = forecast(ForecastType::UserRisk, now);
        let unscored = forecast(ForecastType::UserRisk, now);
        let other_type = forecast(ForecastType::MarketRisk, now);

        for f in [&old, &new, &unscored, &other_type] {
            store.save(f).await.unwrap();
        }
        store.record_outcome(&old.id, 0.5, 0.9).await.unwrap();
        store.record_outcome(&new.id, 0.5, 0.7).await.unwrap();
        store.record_outcome(&other_type.id, 0.5, 0.6).await.unwrap();

        let scored = store.recent_scored(ForecastType::UserRisk, 10).await.unwrap();
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].id, new.id);
        assert_eq!(scored[1].id, old.id);

        let limited = store.recent_scored(ForecastType::UserRisk, 1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }
}
