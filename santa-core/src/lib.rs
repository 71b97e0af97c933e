//! Secret Santa Core - Participants, Rosters and Derangements
//!
//! Everything the other crates share: the participant identity, the validated
//! roster, the giver → recipient assignment and the generator that produces it.
//! No I/O beyond reading the participant list lives here.

pub mod assignment;
pub mod derangement;
pub mod error;
pub mod roster;

pub use assignment::{Assignment, Pairing};
pub use derangement::{DerangementGenerator, DerangementStrategy};
pub use error::{SantaError, SantaResult, StorageError, ValidationError};
pub use roster::{parse_roster, read_roster, Roster};

use std::fmt;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// A participant in the exchange, identified by name.
///
/// Names are opaque: two participants are the same person exactly when their
/// trimmed names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Participant(String);

impl Participant {
    /// Create a participant, trimming surrounding whitespace from the name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display width of the name in characters.
    pub fn width(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Participant {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
