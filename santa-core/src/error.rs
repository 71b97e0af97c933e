//! Error types for Secret Santa operations

use std::path::PathBuf;
use thiserror::Error;

/// Roster validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least two participants required, got {count}")]
    TooFewParticipants { count: usize },

    #[error("duplicate participant: {name}")]
    DuplicateParticipant { name: String },

    #[error("participant name must not be empty")]
    EmptyName,
}

/// Input and output storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("participant list unavailable at {}: {source}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create output location {}: {source}", path.display())]
    CreateLocation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write record {}: {source}", path.display())]
    WriteRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read record {}: {source}", path.display())]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot name a record after {name:?}: {reason}")]
    InvalidRecordName { name: String, reason: String },

    #[error("records for {first:?} and {second:?} would share one name on a case-insensitive store")]
    RecordNameCollision { first: String, second: String },

    #[error("record store lock poisoned")]
    LockPoisoned,
}

/// Master error type for all Secret Santa errors.
#[derive(Debug, Error)]
pub enum SantaError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for Secret Santa operations.
pub type SantaResult<T> = Result<T, SantaError>;

// =============================================================================
// TESTS
// =============================================================================
