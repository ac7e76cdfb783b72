//! CheckContentAccessHandler - Query handler gating content by level.

use std::sync::Arc;

use crate::domain::access::AccessPolicy;
use crate::domain::foundation::{DomainError, Phase, ReadinessLevel, UserId};
use crate::ports::AssessmentStore;

/// Query asking whether a user may view one content item.
#[derive(Debug, Clone)]
pub struct CheckContentAccessQuery {
    pub user_id: UserId,
    pub phase: Phase,
    pub difficulty: ReadinessLevel,
}

/// Result of a content access check.
#[derive(Debug, Clone)]
pub struct CheckContentAccessResult {
    pub has_access: bool,
    /// The level the decision was made against.
    pub level: ReadinessLevel,
}

/// Handler resolving a user's level and consulting the access policy.
///
/// Called on every content view, so it does one store read and a pure
/// table lookup. Users with no completed assessment are treated as
/// Beginner rather than denied outright; they still see entry-level
/// content.
pub struct CheckContentAccessHandler {
    store: Arc<dyn AssessmentStore>,
    policy: AccessPolicy,
}

impl CheckContentAccessHandler {
    pub fn new(store: Arc<dyn AssessmentStore>, policy: AccessPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(
        &self,
        query: CheckContentAccessQuery,
    ) -> Result<CheckContentAccessResult, DomainError> {
        let level = self
            .store
            .latest_for_user(&query.user_id)
            .await?
            .map(|record| record.overall_level)
            .unwrap_or(ReadinessLevel::Beginner);

        Ok(CheckContentAccessResult {
            has_access: self.policy.has_access(level, query.phase, query.difficulty),
            level,
        })
    }
}
