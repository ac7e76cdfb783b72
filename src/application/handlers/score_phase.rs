//! ScorePhaseHandler - Scores one phase's answer set.

use crate::domain::assessment::{
    builtin_template, AnswerSet, AssessmentTemplate, ScoreCalculator, ScoreResult,
};
use crate::domain::foundation::Phase;

/// Command to score a single phase attempt.
#[derive(Debug, Clone)]
pub struct ScorePhaseCommand {
    pub phase: Phase,
    pub answers: AnswerSet,
}

/// Handler scoring one phase attempt against its template.
///
/// Pure computation; glue code calls this once per submitted phase and
/// shows the result before the cycle completes.
pub struct ScorePhaseHandler {
    calculator: ScoreCalculator,
    templates: Option<[AssessmentTemplate; 3]>,
}

impl ScorePhaseHandler {
    /// Creates a handler using the built-in question bank.
    pub fn new(calculator: ScoreCalculator) -> Self {
        Self {
            calculator,
            templates: None,
        }
    }

    /// Creates a handler over custom templates, one per phase in
    /// canonical order.
    pub fn with_templates(calculator: ScoreCalculator, templates: [AssessmentTemplate; 3]) -> Self {
        Self {
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

    pub fn handle(&self, command: ScorePhaseCommand) -> ScoreResult {
        self.calculator
            .calculate(&command.answers, self.template(command.phase))
    }
}

impl Default for ScorePhaseHandler {
    fn default() -> Self {
        Self::new(ScoreCalculator::default())
    }
}
