//! User-submitted answer sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single submitted answer value.
///
/// JSON-serializable: choice answers carry the selected option value,
/// rating answers the 1-5 integer, multi-choice answers the selected
/// option values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    Choice(String),
    Rating(u8),
    Multi(Vec<String>),
}

/// All answers for one assessment attempt, keyed by question id.
///
/// Created fresh per attempt and discarded after scoring. Extra or stale
/// question ids are tolerated; the calculator ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier answer to the same question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.answers.insert(question_id.into(), value);
    }

    /// Builder-style insert for test and bootstrap ergonomics.
    pub fn with(mut self, question_id: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Returns the answer for a question, if any.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// True when no questions are answered.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates over (question id, answer) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.answers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_previous_answer() {
        let mut answers = AnswerSet::new();
        answers.insert("q1", AnswerValue::Rating(2));
        answers.insert("q1", AnswerValue::Rating(4));

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.get("q1"), Some(&AnswerValue::Rating(4)));
    }

    #[test]
    fn with_builds_fluently() {
        let answers = AnswerSet::new()
            .with("q1", AnswerValue::Choice("yes".into()))
            .with("q2", AnswerValue::Multi(vec!["a".into(), "b".into()]));

        assert_eq!(answers.len(), 2);
        assert!(!answers.is_empty());
    }

    #[test]
    fn answer_value_json_shape_is_stable() {
        let json = serde_json::to_string(&AnswerValue::Rating(3)).unwrap();
        assert_eq!(json, r#"{"kind":"rating","value":3}"#);

        let json = serde_json::to_string(&AnswerValue::Choice("weekly".into())).unwrap();
        assert_eq!(json, r#"{"kind":"choice","value":"weekly"}"#);
    }

    #[test]
    fn answer_set_serializes_as_plain_map() {
        let answers = AnswerSet::new().with("q1", AnswerValue::Rating(5));
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"q1":{"kind":"rating","value":5}}"#);
    }

    #[test]
    fn round_trips_through_json() {
        let answers = AnswerSet::new()
            .with("q1", AnswerValue::Choice("monthly".into()))
            .with("q2", AnswerValue::Multi(vec!["budget".into()]));

        let json = serde_json::to_string(&answers).unwrap();
        let back: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(answers, back);
    }
}
