//! Storage port for persisted assessment records.
//!
//! The engine treats persistence as an external collaborator; this port
//! is the contract it expects from whatever relational store backs it.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentRecord;
use crate::domain::foundation::{DomainError, UserId};

/// Port for reading and writing per-user assessment records.
///
/// Records are append-only: a new cycle's record supersedes earlier ones
/// by timestamp; implementations never delete.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    /// Persists a completed cycle's record.
    async fn save(&self, record: &AssessmentRecord) -> Result<(), DomainError>;

    /// Returns the user's most recent record, if any.
    async fn latest_for_user(&self, user_id: &UserId)
        -> Result<Option<AssessmentRecord>, DomainError>;

    /// Returns all of the user's records, newest first.
    async fn history_for_user(&self, user_id: &UserId)
        -> Result<Vec<AssessmentRecord>, DomainError>;
}
