//! Assessment phase enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three assessment dimensions every user is scored on.
///
/// Modeled as a closed enum so the aggregator and access resolver get
/// compile-time exhaustiveness over phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Identity and mindset.
    Be,
    /// Skills and action.
    Do,
    /// Results and wealth.
    Have,
}

impl Phase {
    /// All phases in canonical order.
    pub const ALL: [Phase; 3] = [Phase::Be, Phase::Do, Phase::Have];

    /// Returns the display label for this phase.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Be => "BE",
            Phase::Do => "DO",
            Phase::Have => "HAVE",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
