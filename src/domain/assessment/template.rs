//! Assessment templates: one phase's fixed question set.

use serde::{Deserialize, Serialize};

use super::question::Question;
use crate::domain::foundation::{Phase, ValidationError};

/// The fixed question set for one assessment phase.
///
/// Templates are built once at bootstrap (or loaded from template storage)
/// and never mutated afterwards; per-user state lives in answer sets and
/// assessment records, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentTemplate {
    pub name: String,
    pub description: String,
    pub phase: Phase,
    questions: Vec<Question>,
}

impl AssessmentTemplate {
    /// Creates a new template, rejecting duplicate question ids.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        phase: Phase,
        questions: Vec<Question>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        for (i, q) in questions.iter().enumerate() {
            if q.id.is_empty() {
                return Err(ValidationError::empty_field("question.id"));
            }
            if questions[..i].iter().any(|prev| prev.id == q.id) {
                return Err(ValidationError::invalid_format(
                    "questions",
                    format!("duplicate question id '{}'", q.id),
                ));
            }
        }
        Ok(Self {
            name,
            description: description.into(),
            phase,
            questions,
        })
    }

    /// Returns the ordered questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the number of questions.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Looks up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
