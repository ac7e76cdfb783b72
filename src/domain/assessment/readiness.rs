//! Overall readiness aggregation across the three phases.

use serde::{Deserialize, Serialize};

use super::score::{LevelThresholds, ScoreResult};
use crate::domain::foundation::{Phase, ReadinessLevel, ScorePercent};

/// Score results for all three phases of one assessment cycle.
///
/// All three fields are mandatory, so a partial phase set is
/// unrepresentable; aggregation always sees exactly BE, DO and HAVE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseScores {
    pub be: ScoreResult,
    #[serde(rename = "do")]
    pub do_: ScoreResult,
    pub have: ScoreResult,
}

impl PhaseScores {
    /// Returns the result for the given phase.
    pub fn for_phase(&self, phase: Phase) -> &ScoreResult {
        match phase {
            Phase::Be => &self.be,
            Phase::Do => &self.do_,
            Phase::Have => &self.have,
        }
    }

    /// Iterates phase results in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreResult> {
        [&self.be, &self.do_, &self.have].into_iter()
    }
}

/// Aggregated overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallReadiness {
    pub percent: ScorePercent,
    pub level: ReadinessLevel,
}

impl OverallReadiness {
    /// Combines the three phase percentages into one overall level.
    ///
    /// The overall percentage is the arithmetic mean of the three phase
    /// percentages, mapped through the same thresholds used per phase.
    pub fn aggregate(scores: &PhaseScores, thresholds: &LevelThresholds) -> Self {
        let mean = (scores.be.percent.value()
            + scores.do_.percent.value()
            + scores.have.percent.value())
            / 3.0;
        let percent = ScorePercent::new(mean);
        Self {
            percent,
            level: thresholds.level_for(percent),
        }
    }
}
