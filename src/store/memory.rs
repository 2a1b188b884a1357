//! In-process record store.

use super::{RecordStore, add_to, check_unique_ids, remove_from, update_in};
use crate::error::Result;
use crate::template::TemplateRecord;

/// A record store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<TemplateRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<TemplateRecord>) -> Result<Self> {
        check_unique_ids(&records)?;
        Ok(Self { records })
    }
}

impl RecordStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<TemplateRecord>> {
        Ok(self.records.clone())
    }

    fn add(&mut self, record: TemplateRecord) -> Result<()> {
        add_to(&mut self.records, record)
    }

    fn update(&mut self, record: TemplateRecord) -> Result<TemplateRecord> {
        update_in(&mut self.records, record)
    }

    fn remove(&mut self, id: &str) -> Result<TemplateRecord> {
        remove_from(&mut self.records, id)
    }

    fn replace_all(&mut self, records: Vec<TemplateRecord>) -> Result<()> {
        check_unique_ids(&records)?;
        self.records = records;
        Ok(())
    }
}
