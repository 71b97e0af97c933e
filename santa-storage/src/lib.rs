//! Secret Santa Storage - Record Store Trait and Implementations
//!
//! An assignment is persisted as one record per giver, keyed by the giver's
//! name, holding the recipient's name. Each giver can look up their own record
//! without seeing anyone else's.

pub mod directory;
pub mod memory;

pub use directory::{DirectoryStore, RECORD_EXTENSION};
pub use memory::MemoryStore;

use santa_core::{Assignment, Participant, SantaResult, StorageError};
use std::collections::HashMap;

/// Longest record file name, in bytes, most filesystems accept.
pub const NAME_MAX: usize = 255;

// ============================================================================
// RECORD FORMAT
// ============================================================================

/// How recipient names are laid out inside a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordFormat {
    /// Right-pad every recipient with spaces to the widest recipient name.
    pub pad_to_widest: bool,
}

impl RecordFormat {
    pub fn padded() -> Self {
        Self { pad_to_widest: true }
    }

    /// Render all records of an assignment, in assignment order.
    pub fn render(&self, assignment: &Assignment) -> Vec<Record> {
        let width = if self.pad_to_widest {
            assignment.widest_recipient()
        } else {
            0
        };
        assignment
            .iter()
            .map(|(giver, recipient)| Record {
                giver: giver.clone(),
                content: format!("{:<width$}", recipient.as_str(), width = width),
            })
            .collect()
    }
}

/// One giver's record as it will be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub giver: Participant,
    pub content: String,
}

/// Outcome of persisting an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub records_written: usize,
}

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Persistence for assignments, one record per giver.
///
/// Writes are not atomic across the batch: a failure part way through leaves
/// the records already written in place.
pub trait AssignmentStore: Send + Sync {
    /// Write (or overwrite) a record for every giver in the assignment.
    fn write_assignment(&self, assignment: &Assignment) -> SantaResult<WriteSummary>;

    /// Look up one giver's recipient. Padding is trimmed. `None` when the
    /// giver has no record.
    fn read_recipient(&self, giver: &Participant) -> SantaResult<Option<Participant>>;
}

/// Check that a giver's name can key a record on its own.
pub fn validate_record_name(giver: &Participant) -> Result<(), StorageError> {
    let name = giver.as_str();
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name == "." || name == ".." {
        Some("name is a relative path component")
    } else if name.contains(['/', '\\']) {
        Some("name contains a path separator")
    } else if name.contains('\0') {
        Some("name contains a NUL byte")
    } else if name.len() + RECORD_EXTENSION.len() + 1 > NAME_MAX {
        Some("record file name exceeds 255 bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(StorageError::InvalidRecordName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

/// Check every giver's name, and that no two of them differ only by case.
///
/// Records are files on disk, and on case-insensitive filesystems `Alice.txt`
/// and `alice.txt` are the same file.
pub fn validate_record_names<'a>(
    givers: impl IntoIterator<Item = &'a Participant>,
) -> Result<(), StorageError> {
    let mut folded: HashMap<String, &Participant> = HashMap::new();
    for giver in givers {
        validate_record_name(giver)?;
        if let Some(first) = folded.insert(giver.as_str().to_lowercase(), giver) {
            return Err(StorageError::RecordNameCollision {
                first: first.to_string(),
                second: giver.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
