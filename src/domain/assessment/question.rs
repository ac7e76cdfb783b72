//! Question and answer-option definitions.

use serde::{Deserialize, Serialize};

/// How a question is answered and scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Exactly one option is selected.
    SingleChoice,
    /// Any subset of options may be selected.
    MultiChoice,
    /// An integer rating from 1 to 5, matched against option values.
    RatingScale,
}

/// One selectable answer with its point weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// The option's value: a label for choice questions, a stringified
    /// integer ("1".."5") for rating questions.
    pub value: String,
    /// Non-negative point weight awarded when this option is selected.
    pub points: u32,
}

impl AnswerOption {
    /// Creates a new answer option.
    pub fn new(value: impl Into<String>, points: u32) -> Self {
        Self {
            value: value.into(),
            points,
        }
    }
}

/// A single assessment question with its ordered options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within a template.
    pub id: String,
    /// Prompt shown to the user.
    pub prompt: String,
    pub question_type: QuestionType,
    /// Ordered list of selectable options.
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Creates a new question.
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        question_type: QuestionType,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            question_type,
            options,
        }
    }

    /// Returns the highest single-option weight, zero for no options.
    pub fn max_points(&self) -> u32 {
        self.options.iter().map(|o| o.points).max().unwrap_or(0)
    }

    /// Returns the point weight of the option with the given value, if any.
    pub fn option_points(&self, value: &str) -> Option<u32> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question::new(
            "be_q1",
            "How do you see your financial future?",
            QuestionType::SingleChoice,
            vec![
                AnswerOption::new("pessimistic", 1),
                AnswerOption::new("uncertain", 3),
                AnswerOption::new("confident", 5),
            ],
        )
    }

    #[test]
    fn max_points_is_highest_option_weight() {
        assert_eq!(sample_question().max_points(), 5);
    }

    #[test]
    fn max_points_zero_for_no_options() {
        let q = Question::new("empty", "?", QuestionType::SingleChoice, vec![]);
        assert_eq!(q.max_points(), 0);
    }

    #[test]
    fn option_points_finds_matching_value() {
        let q = sample_question();
        assert_eq!(q.option_points("uncertain"), Some(3));
        assert_eq!(q.option_points("confident"), Some(5));
    }

    #[test]
    fn option_points_none_for_unknown_value() {
        assert_eq!(sample_question().option_points("missing"), None);
    }

    #[test]
    fn question_serializes_with_snake_case_type() {
        let json = serde_json::to_string(&sample_question()).unwrap();
        assert!(json.contains("\"single_choice\""));
        assert!(json.contains("\"be_q1\""));
    }
}
