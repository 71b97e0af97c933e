//! In-memory record store for tests.

use crate::{validate_record_names, AssignmentStore, RecordFormat, WriteSummary};
use santa_core::{Assignment, Participant, SantaResult, StorageError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Record store backed by a shared map of giver → raw record content.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<RwLock<HashMap<Participant, String>>>,
    format: RecordFormat,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: RecordFormat) -> Self {
        self.format = format;
        self
    }

    /// Raw content of a giver's record, padding included.
    pub fn raw_record(&self, giver: &Participant) -> SantaResult<Option<String>> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.get(giver).cloned())
    }

    /// Number of stored records.
    pub fn len(&self) -> SantaResult<usize> {
        let records = self.records.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> SantaResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> SantaResult<()> {
        let mut records = self.records.write().map_err(|_| StorageError::LockPoisoned)?;
        records.clear();
        Ok(())
    }
}

impl AssignmentStore for MemoryStore {
    fn write_assignment(&self, assignment: &Assignment) -> SantaResult<WriteSummary> {
        validate_record_names(assignment.iter().map(|(giver, _)| giver))?;

        let rendered = self.format.render(assignment);
        let mut records = self.records.write().map_err(|_| StorageError::LockPoisoned)?;
        for record in &rendered {
            records.insert(record.giver.clone(), record.content.clone());
        }

        Ok(WriteSummary {
            records_written: rendered.len(),
        })
    }

    fn read_recipient(&self, giver: &Participant) -> SantaResult<Option<Participant>> {
        Ok(self.raw_record(giver)?.map(Participant::new))
    }
}
