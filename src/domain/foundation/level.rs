//! Readiness level enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete readiness tier.
///
/// Doubles as the difficulty tag on content items: a user's assessed level
/// is compared against a content item's difficulty when gatekeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ReadinessLevel {
    /// All levels ordered lowest to highest.
    pub const ALL: [ReadinessLevel; 3] = [
        ReadinessLevel::Beginner,
        ReadinessLevel::Intermediate,
        ReadinessLevel::Advanced,
    ];

    /// Returns the numeric rank of this level for comparison.
    ///
    /// Higher rank unlocks more content.
    pub fn rank(&self) -> u8 {
        match self {
            ReadinessLevel::Beginner => 0,
            ReadinessLevel::Intermediate => 1,
            ReadinessLevel::Advanced => 2,
        }
    }

    /// Returns the display name for this level.
    pub fn display_name(&self) -> &'static str {
        match self {
            ReadinessLevel::Beginner => "Beginner",
            ReadinessLevel::Intermediate => "Intermediate",
            ReadinessLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
