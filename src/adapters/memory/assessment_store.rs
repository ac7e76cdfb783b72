//! In-memory assessment store adapter.
//!
//! Backs the integration tests and development bootstrap; production
//! deployments implement the port over their relational store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::AssessmentStore;

/// In-memory, append-only store of assessment records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    records: Arc<RwLock<HashMap<UserId, Vec<AssessmentRecord>>>>,
}

impl InMemoryAssessmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all users (useful for tests).
    pub async fn record_count(&self) -> usize {
        self.records.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl AssessmentStore for InMemoryAssessmentStore {
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records
            .entry(record.user_id.clone())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    async fn latest_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<AssessmentRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(user_id).and_then(|history| {
            history
                .iter()
                .max_by_key(|r| r.completed_at)
                .cloned()
        }))
    }

    async fn history_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<AssessmentRecord>, DomainError> {
        let records = self.records.read().await;
        let mut history = records.get(user_id).cloned().unwrap_or_default();
        history.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{
        LevelThresholds, OverallReadiness, PhaseScores, ScoreResult,
    };
    use crate::domain::foundation::{Phase, ScorePercent, Timestamp};

    fn record(user: &str, completed_at: Timestamp, percent: f64) -> AssessmentRecord {
        let score = |phase| {
            let percent = ScorePercent::new(percent);
            ScoreResult {
                phase,
                total_points: 0,
                max_points: 0,
                percent,
                level: LevelThresholds::default().level_for(percent),
                answered: 0,
                question_count: 0,
            }
        };
        let scores = PhaseScores {
            be: score(Phase::Be),
            do_: score(Phase::Do),
            have: score(Phase::Have),
        };
        let overall = OverallReadiness::aggregate(&scores, &LevelThresholds::default());
        AssessmentRecord::from_scores(UserId::new(user).unwrap(), &scores, overall, completed_at)
    }

    #[tokio::test]
    async fn latest_wins_by_completed_at() {
        let store = InMemoryAssessmentStore::new();
        let now = Timestamp::now();

        store.save(&record("u1", now.minus_days(10), 50.0)).await.unwrap();
        store.save(&record("u1", now, 85.0)).await.unwrap();
        store.save(&record("u1", now.minus_days(5), 70.0)).await.unwrap();

        let latest = store
            .latest_for_user(&UserId::new("u1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.overall_percent.value(), 85.0);
    }

    #[tokio::test]
    async fn earlier_records_are_superseded_not_deleted() {
        let store = InMemoryAssessmentStore::new();
        let now = Timestamp::now();

        store.save(&record("u1", now.minus_days(1), 40.0)).await.unwrap();
        store.save(&record("u1", now, 60.0)).await.unwrap();

        let history = store
            .history_for_user(&UserId::new("u1").unwrap())
            .await
            .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].overall_percent.value(), 60.0);
        assert_eq!(store.record_count().await, 2);
    }

    #[tokio::test]
    async fn unknown_user_has_no_records() {
        let store = InMemoryAssessmentStore::new();
        let user = UserId::new("ghost").unwrap();

        assert!(store.latest_for_user(&user).await.unwrap().is_none());
        assert!(store.history_for_user(&user).await.unwrap().is_empty());
    }
}
