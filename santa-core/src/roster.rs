//! Participant list parsing and roster validation.

use crate::error::{SantaResult, StorageError, ValidationError};
use crate::Participant;
use std::collections::HashSet;
use std::path::Path;

/// Minimum number of participants a derangement exists for.
pub const MIN_PARTICIPANTS: usize = 2;

/// Parse a participant list: one name per line, blank lines skipped.
///
/// No validation happens here; see [`Roster::new`].
pub fn parse_roster(text: &str) -> Vec<Participant> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Participant::new)
        .collect()
}

/// Read and parse a participant list from disk.
pub fn read_roster(path: &Path) -> SantaResult<Vec<Participant>> {
    let text = std::fs::read_to_string(path).map_err(|source| StorageError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let participants = parse_roster(&text);
    tracing::debug!(path = %path.display(), count = participants.len(), "Read participant list");
    Ok(participants)
}

/// An ordered, validated set of participants.
///
/// Invariants: at least [`MIN_PARTICIPANTS`] entries, no empty names, no
/// duplicates. Order is the order the participants were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Result<Self, ValidationError> {
        if participants.len() < MIN_PARTICIPANTS {
            return Err(ValidationError::TooFewParticipants {
                count: participants.len(),
            });
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for participant in &participants {
            if participant.is_empty() {
                return Err(ValidationError::EmptyName);
            }
            if !seen.insert(participant.as_str()) {
                return Err(ValidationError::DuplicateParticipant {
                    name: participant.to_string(),
                });
            }
        }

        Ok(Self { participants })
    }

    /// Convenience constructor from anything name-like.
    pub fn from_names<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(names.into_iter().map(Participant::new).collect())
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Always false for a constructed roster; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }
}

// =============================================================================
// TESTS
// =============================================================================
