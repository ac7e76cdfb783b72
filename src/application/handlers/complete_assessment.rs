//! CompleteAssessmentHandler - Turns a full answer cycle into a persisted record.

use std::sync::Arc;

use crate::domain::assessment::{
    builtin_template, AnswerSet, AssessmentRecord, AssessmentTemplate, OverallReadiness,
    PhaseScores, ScoreCalculator,
};
use crate::domain::foundation::{DomainError, Phase, Timestamp, UserId};
use crate::ports::AssessmentStore;

/// Command carrying the answer sets for all three phases.
///
/// All three are required; a cycle with missing phases cannot be
/// submitted.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub user_id: UserId,
    pub be_answers: AnswerSet,
    pub do_answers: AnswerSet,
    pub have_answers: AnswerSet,
}

/// Result of completing an assessment cycle.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub record: AssessmentRecord,
}

/// Handler scoring all three phases, aggregating, and persisting the record.
pub struct CompleteAssessmentHandler {
    store: Arc<dyn AssessmentStore>,
    calculator: ScoreCalculator,
    templates: Option<[AssessmentTemplate; 3]>,
}

impl CompleteAssessmentHandler {
    /// Creates a handler over the built-in question bank.
    pub fn new(store: Arc<dyn AssessmentStore>, calculator: ScoreCalculator) -> Self {
        Self {
            store,
            calculator,
            templates: None,
        }
    }

    /// Creates a handler over custom templates.
    pub fn with_templates(
        store: Arc<dyn AssessmentStore>,
        calculator: ScoreCalculator,
        templates: [AssessmentTemplate; 3],
    ) -> Self {
        Self {
            store,
            calculator,
            templates: Some(templates),
        }
    }

    fn template(&self, phase: Phase) -> &AssessmentTemplate {
        match &self.templates {
            Some(templates) => templates
                .iter()
                .find(|t| t.phase == phase)
                .unwrap_or_else(|| builtin_template(phase)),
            None => builtin_template(phase),
        }
    }

    pub async fn handle(
        &self,
        command: CompleteAssessmentCommand,
    ) -> Result<CompleteAssessmentResult, DomainError> {
        let scores = PhaseScores {
            be: self
                .calculator
                .calculate(&command.be_answers, self.template(Phase::Be)),
            do_: self
                .calculator
                .calculate(&command.do_answers, self.template(Phase::Do)),
            have: self
                .calculator
                .calculate(&command.have_answers, self.template(Phase::Have)),
        };
        let overall = OverallReadiness::aggregate(&scores, &self.calculator.thresholds());
        let record =
            AssessmentRecord::from_scores(command.user_id, &scores, overall, Timestamp::now());

        self.store.save(&record).await?;

        tracing::debug!(
            user_id = %record.user_id,
            overall_level = %record.overall_level,
            "assessment cycle completed"
        );
        Ok(CompleteAssessmentResult { record })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentStore;
    use crate::domain::assessment::AnswerValue;
    use crate::domain::foundation::ReadinessLevel;
    use async_trait::async_trait;

    fn strong_be_answers() -> AnswerSet {
        AnswerSet::new()
            .with("be_outlook", AnswerValue::Choice("confident".into()))
            .with("be_identity", AnswerValue::Rating(5))
            .with("be_learning", AnswerValue::Choice("weekly".into()))
            .with("be_stress", AnswerValue::Rating(5))
    }

    fn weak_answers() -> AnswerSet {
        AnswerSet::new()
    }

    #[tokio::test]
    async fn persists_record_with_aggregated_level() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = CompleteAssessmentHandler::new(store.clone(), ScoreCalculator::default());

        let result = handler
            .handle(CompleteAssessmentCommand {
                user_id: UserId::new("u1").unwrap(),
                be_answers: strong_be_answers(),
                do_answers: weak_answers(),
                have_answers: weak_answers(),
            })
            .await
            .unwrap();

        // Strong BE (100%), empty DO and HAVE (0%) average out to 33%.
        assert_eq!(result.record.be.level, ReadinessLevel::Advanced);
        assert_eq!(result.record.do_.level, ReadinessLevel::Beginner);
        assert_eq!(result.record.overall_level, ReadinessLevel::Beginner);

        let stored = store
            .latest_for_user(&UserId::new("u1").unwrap())
            .await
            .unwrap();
        assert_eq!(stored.unwrap().id, result.record.id);
    }

    #[tokio::test]
    async fn later_cycle_supersedes_earlier() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = CompleteAssessmentHandler::new(store.clone(), ScoreCalculator::default());
        let user_id = UserId::new("u1").unwrap();

        handler
            .handle(CompleteAssessmentCommand {
                user_id: user_id.clone(),
                be_answers: weak_answers(),
                do_answers: weak_answers(),
                have_answers: weak_answers(),
            })
            .await
            .unwrap();
        let second = handler
            .handle(CompleteAssessmentCommand {
                user_id: user_id.clone(),
                be_answers: strong_be_answers(),
                do_answers: weak_answers(),
                have_answers: weak_answers(),
            })
            .await
            .unwrap();

        let latest = store.latest_for_user(&user_id).await.unwrap().unwrap();
        assert_eq!(latest.id, second.record.id);
        assert_eq!(store.record_count().await, 2);
    }

    struct FailingStore;

    #[async_trait]
    impl AssessmentStore for FailingStore {
        async fn save(&self, _record: &AssessmentRecord) -> Result<(), DomainError> {
            Err(DomainError::storage("simulated write failure"))
        }

        async fn latest_for_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<AssessmentRecord>, DomainError> {
            Ok(None)
        }

        async fn history_for_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<AssessmentRecord>, DomainError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let handler =
            CompleteAssessmentHandler::new(Arc::new(FailingStore), ScoreCalculator::default());

        let result = handler
            .handle(CompleteAssessmentCommand {
                user_id: UserId::new("u1").unwrap(),
                be_answers: weak_answers(),
                do_answers: weak_answers(),
                have_answers: weak_answers(),
            })
            .await;

        assert!(result.is_err());
    }
}
