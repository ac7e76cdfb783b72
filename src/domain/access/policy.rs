//! Progressive access policy for difficulty-gated content.

use std::collections::{BTreeSet, HashMap};

use crate::domain::foundation::{Phase, ReadinessLevel};

/// The precomputed gatekeeping table: which content difficulties each
/// readiness level may view, per phase.
///
/// Built once at bootstrap and never mutated; lookups are pure and do no
/// I/O, so the policy can be shared freely across request threads.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    table: HashMap<(ReadinessLevel, Phase), BTreeSet<ReadinessLevel>>,
}

impl AccessPolicy {
    /// Builds the standard progressive policy.
    ///
    /// For every phase, each level's allowed set is the union of all
    /// levels at or below it: Beginner sees Beginner content, Intermediate
    /// adds Intermediate, Advanced sees everything. The sets are therefore
    /// strictly nested by level.
    pub fn progressive() -> Self {
        let mut table = HashMap::new();
        for level in ReadinessLevel::ALL {
            let allowed: BTreeSet<ReadinessLevel> = ReadinessLevel::ALL
                .into_iter()
                .filter(|difficulty| difficulty.rank() <= level.rank())
                .collect();
            for phase in Phase::ALL {
                table.insert((level, phase), allowed.clone());
            }
        }
        Self { table }
    }

    /// Builds a policy from an explicit table.
    ///
    /// Exists for tests and for deployments that gate some phases harder
    /// than others; missing entries simply deny.
    pub fn from_table(
        table: HashMap<(ReadinessLevel, Phase), BTreeSet<ReadinessLevel>>,
    ) -> Self {
        Self { table }
    }

    /// Decides whether a user at `level` may view `difficulty` content in
    /// `phase`.
    ///
    /// Unknown (level, phase) pairs deny access: an incomplete table is a
    /// configuration gap, never an open door.
    pub fn has_access(
        &self,
        level: ReadinessLevel,
        phase: Phase,
        difficulty: ReadinessLevel,
    ) -> bool {
        match self.table.get(&(level, phase)) {
            Some(allowed) => allowed.contains(&difficulty),
            None => {
                tracing::warn!(
                    level = %level,
                    phase = %phase,
                    "access table has no entry for level/phase pair, denying"
                );
                false
            }
        }
    }

    /// Returns the difficulties a level may view in a phase, empty for
    /// unknown pairs.
    pub fn allowed_difficulties(
        &self,
        level: ReadinessLevel,
        phase: Phase,
    ) -> BTreeSet<ReadinessLevel> {
        self.table
            .get(&(level, phase))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::progressive()
    }
}
