//! Secret Santa Test Utilities
//!
//! Shared test infrastructure for the workspace:
//! - Proptest generators for participants and rosters
//! - Fixtures for participant list files
//! - Assertions for assignment validity

pub use santa_core::{
    Assignment, DerangementGenerator, DerangementStrategy, Participant, Roster, SantaError,
    SantaResult, StorageError, ValidationError,
};

use proptest::prelude::*;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// GENERATORS
// ============================================================================

/// A name that is also usable as a record file name.
pub fn arb_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,9}( [A-Z][a-z]{0,9})?"
}

/// A participant.
pub fn arb_participant() -> impl Strategy<Value = Participant> {
    arb_name().prop_map(Participant::new)
}

/// Unique names, shuffled, with a size in `min..=max`.
pub fn arb_unique_names(min: usize, max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(arb_name(), min..=max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// A valid roster of between `min` and `max` participants (`min >= 2`).
pub fn arb_roster(min: usize, max: usize) -> impl Strategy<Value = Roster> {
    arb_unique_names(min.max(2), max.max(2))
        .prop_map(|names| Roster::from_names(names).expect("generated names are unique"))
}

/// Either derangement strategy.
pub fn arb_strategy() -> impl Strategy<Value = DerangementStrategy> {
    prop_oneof![
        Just(DerangementStrategy::Rejection),
        Just(DerangementStrategy::Repair),
    ]
}

// ============================================================================
// FIXTURES
// ============================================================================

/// Roster built from literal names; panics on invalid input.
pub fn roster(names: &[&str]) -> Roster {
    Roster::from_names(names.iter().copied()).expect("fixture roster must be valid")
}

/// Seeded assignment for a literal roster.
pub fn seeded_assignment(names: &[&str], seed: u64) -> Assignment {
    DerangementGenerator::seeded(seed, DerangementStrategy::Repair).generate(&roster(names))
}

/// A scratch directory holding a participant list file.
pub struct RosterFixture {
    dir: TempDir,
    path: PathBuf,
}

impl RosterFixture {
    /// Write `lines` (one per line, verbatim) to `participants.txt`.
    pub fn with_lines(lines: &[&str]) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("participants.txt");
        let mut file = std::fs::File::create(&path).expect("create participant list");
        for line in lines {
            writeln!(file, "{}", line).expect("write participant list");
        }
        Self { dir, path }
    }

    /// Path of the participant list.
    pub fn roster_path(&self) -> &Path {
        &self.path
    }

    /// Scratch directory; also a good place for output.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `assignment` is a derangement of `roster` in roster order.
pub fn assert_derangement_of(roster: &Roster, assignment: &Assignment) {
    assert_eq!(assignment.len(), roster.len(), "assignment size differs from roster");

    for ((giver, recipient), expected) in assignment.iter().zip(roster.iter()) {
        assert_eq!(giver, expected, "givers out of roster order");
        assert_ne!(giver, recipient, "{} drew their own name", giver);
    }

    let recipients: BTreeSet<&Participant> = assignment.iter().map(|(_, r)| r).collect();
    let everyone: BTreeSet<&Participant> = roster.iter().collect();
    assert_eq!(recipients, everyone, "recipients are not a permutation of the roster");
}
