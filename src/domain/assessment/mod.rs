//! Assessment module - question bank, scoring, and readiness aggregation.
//!
//! Raw answers flow through the [`score::ScoreCalculator`] to produce one
//! [`score::ScoreResult`] per phase; [`readiness::OverallReadiness`]
//! combines the three into the overall level that drives gatekeeping.

mod answers;
mod question;
mod question_bank;
mod readiness;
mod record;
mod score;
mod template;

pub use answers::{AnswerSet, AnswerValue};
pub use question::{AnswerOption, Question, QuestionType};
pub use question_bank::{builtin_template, builtin_templates};
pub use readiness::{OverallReadiness, PhaseScores};
pub use record::{AssessmentRecord, PhaseOutcome};
pub use score::{LevelThresholds, ScoreCalculator, ScoreResult};
pub use template::AssessmentTemplate;
