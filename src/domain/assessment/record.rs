//! Persisted assessment records.

use serde::{Deserialize, Serialize};

use super::readiness::{OverallReadiness, PhaseScores};
use crate::domain::foundation::{AssessmentId, Phase, ReadinessLevel, ScorePercent, Timestamp, UserId};

/// One phase's persisted score summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseOutcome {
    pub total_points: u32,
    pub max_points: u32,
    pub percent: ScorePercent,
    pub level: ReadinessLevel,
}

/// The per-user row produced by a completed assessment cycle.
///
/// Records are append-only: a new cycle supersedes the previous record by
/// carrying a later `completed_at`; nothing is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub be: PhaseOutcome,
    #[serde(rename = "do")]
    pub do_: PhaseOutcome,
    pub have: PhaseOutcome,
    pub overall_percent: ScorePercent,
    pub overall_level: ReadinessLevel,
    /// How much of the question bank the user actually answered, 0.0-1.0,
    /// averaged across the three phases.
    pub confidence: f64,
    pub completed_at: Timestamp,
}

impl AssessmentRecord {
    /// Builds a record from one cycle's phase scores and aggregate.
    pub fn from_scores(
        user_id: UserId,
        scores: &PhaseScores,
        overall: OverallReadiness,
        completed_at: Timestamp,
    ) -> Self {
        let confidence = (scores.be.completion_fraction()
            + scores.do_.completion_fraction()
            + scores.have.completion_fraction())
            / 3.0;
        Self {
            id: AssessmentId::new(),
            user_id,
            be: phase_outcome(scores, Phase::Be),
            do_: phase_outcome(scores, Phase::Do),
            have: phase_outcome(scores, Phase::Have),
            overall_percent: overall.percent,
            overall_level: overall.level,
            confidence: confidence.clamp(0.0, 1.0),
            completed_at,
        }
    }

    /// Returns the stored outcome for the given phase.
    pub fn phase(&self, phase: Phase) -> &PhaseOutcome {
        match phase {
            Phase::Be => &self.be,
            Phase::Do => &self.do_,
            Phase::Have => &self.have,
        }
    }
}

fn phase_outcome(scores: &PhaseScores, phase: Phase) -> PhaseOutcome {
    let result = scores.for_phase(phase);
    PhaseOutcome {
        total_points: result.total_points,
        max_points: result.max_points,
        percent: result.percent,
        level: result.level,
    }
}
