//! Derangement generation.
//!
//! A derangement is a permutation with no fixed points: every giver gets a
//! recipient and nobody draws their own name. Two strategies are offered:
//!
//! - [`DerangementStrategy::Rejection`] (default) shuffles until a shuffle
//!   happens to have no fixed points. Uniform over all derangements, expected
//!   ~e shuffles, but with no upper bound on the number of attempts.
//! - [`DerangementStrategy::Repair`] shuffles once and repairs the fixed
//!   points it finds. Always O(n), but not exactly uniform for larger rosters.

use crate::assignment::Assignment;
use crate::error::ValidationError;
use crate::roster::Roster;
use crate::Participant;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How a derangement is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DerangementStrategy {
    /// Reshuffle from scratch until no fixed points remain.
    #[default]
    Rejection,
    /// Shuffle once, then rotate the fixed points away in random order.
    Repair,
}

/// Draws assignments for rosters using an owned random source.
#[derive(Debug, Clone)]
pub struct DerangementGenerator<R = StdRng> {
    rng: R,
    strategy: DerangementStrategy,
}

impl DerangementGenerator<StdRng> {
    /// Generator seeded from operating system entropy.
    pub fn from_os_rng(strategy: DerangementStrategy) -> Self {
        Self::with_rng(StdRng::from_os_rng(), strategy)
    }

    /// Generator with a fixed seed. Same seed, roster and strategy give the
    /// same assignment.
    pub fn seeded(seed: u64, strategy: DerangementStrategy) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), strategy)
    }
}

impl<R: Rng> DerangementGenerator<R> {
    pub fn with_rng(rng: R, strategy: DerangementStrategy) -> Self {
        Self { rng, strategy }
    }

    pub fn strategy(&self) -> DerangementStrategy {
        self.strategy
    }

    /// Validate the participants into a roster, then draw an assignment.
    ///
    /// Fails with [`ValidationError`] for fewer than two participants, blank
    /// names or duplicates. Nothing is drawn on failure.
    pub fn assign(&mut self, participants: &[Participant]) -> Result<Assignment, ValidationError> {
        let roster = Roster::new(participants.to_vec())?;
        Ok(self.generate(&roster))
    }

    /// Draw an assignment for an already validated roster.
    pub fn generate(&mut self, roster: &Roster) -> Assignment {
        let permutation = match self.strategy {
            DerangementStrategy::Rejection => rejection_permutation(roster.len(), &mut self.rng),
            DerangementStrategy::Repair => repaired_permutation(roster.len(), &mut self.rng),
        };
        debug_assert!(is_fixed_point_free(&permutation));
        Assignment::from_permutation(roster, &permutation)
    }
}

fn is_fixed_point_free(permutation: &[usize]) -> bool {
    permutation.iter().enumerate().all(|(i, &p)| i != p)
}

/// Requires `n >= 2`; for smaller `n` no derangement exists and this never
/// returns.
fn rejection_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..n).collect();
    let mut attempts: u64 = 0;
    loop {
        attempts += 1;
        permutation.shuffle(rng);
        if is_fixed_point_free(&permutation) {
            tracing::debug!(participants = n, attempts, "Rejection sampling accepted a shuffle");
            return permutation;
        }
    }
}

/// Requires `n >= 2`.
fn repaired_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);

    let mut fixed: Vec<usize> = (0..n).filter(|&i| permutation[i] == i).collect();
    match fixed.len() {
        0 => {}
        1 => {
            // Swap with any other position. That position is not a fixed
            // point, and its value cannot be `i` since `i` is already taken.
            let i = fixed[0];
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            permutation.swap(i, j);
        }
        k => {
            // Rotating in index order would always favor the same cycle.
            fixed.shuffle(rng);
            for (t, &i) in fixed.iter().enumerate() {
                permutation[i] = fixed[(t + 1) % k];
            }
        }
    }

    tracing::debug!(participants = n, repaired = fixed.len(), "Repaired shuffle fixed points");
    permutation
}

// =============================================================================
// TESTS
// =============================================================================
