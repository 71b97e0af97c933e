//! File-per-giver record store.

use crate::{
    validate_record_name, validate_record_names, AssignmentStore, RecordFormat, WriteSummary,
};
use santa_core::{Assignment, Participant, SantaResult, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Extension of every record file.
pub const RECORD_EXTENSION: &str = "txt";

/// Writes each giver's recipient to `<root>/<giver>.txt`.
///
/// The root directory is created on first write. Existing records for the same
/// givers are overwritten; records for givers absent from the assignment are
/// left alone.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    format: RecordFormat,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: RecordFormat::default(),
        }
    }

    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn format(&self) -> RecordFormat {
        self.format
    }

    /// Path of the record keyed by `giver`.
    pub fn record_path(&self, giver: &Participant) -> PathBuf {
        self.root
            .join(format!("{}.{}", giver.as_str(), RECORD_EXTENSION))
    }
}

impl AssignmentStore for DirectoryStore {
    fn write_assignment(&self, assignment: &Assignment) -> SantaResult<WriteSummary> {
        // Refuse the whole batch before touching disk if any name is unusable.
        validate_record_names(assignment.iter().map(|(giver, _)| giver))?;

        fs::create_dir_all(&self.root).map_err(|source| StorageError::CreateLocation {
            path: self.root.clone(),
            source,
        })?;

        let records = self.format.render(assignment);
        for record in &records {
            let path = self.record_path(&record.giver);
            fs::write(&path, &record.content)
                .map_err(|source| StorageError::WriteRecord { path: path.clone(), source })?;
            tracing::debug!(giver = %record.giver, path = %path.display(), "Wrote record");
        }

        tracing::info!(
            records = records.len(),
            root = %self.root.display(),
            padded = self.format.pad_to_widest,
            "Assignment records written"
        );

        Ok(WriteSummary {
            records_written: records.len(),
        })
    }

    fn read_recipient(&self, giver: &Participant) -> SantaResult<Option<Participant>> {
        validate_record_name(giver)?;
        let path = self.record_path(giver);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(Participant::new(content))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadRecord { path, source }.into()),
        }
    }
}
