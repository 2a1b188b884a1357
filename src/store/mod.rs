//! Record persistence for promptlib.
//!
//! The library is a flat collection of [`TemplateRecord`]s behind the
//! [`RecordStore`] trait. Two implementations exist:
//!
//! - [`JsonFileStore`]: the on-disk collection (`.promptlib/library.json`)
//! - [`MemoryStore`]: an in-process collection
//!
//! Every operation is all-or-nothing: a failed `add`, `update`, or `remove`
//! leaves the collection exactly as it was.

mod json_file;
mod memory;
mod transfer;


pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use transfer::{export_document, export_filename, parse_import};

use crate::error::{PromptError, Result};
use crate::template::TemplateRecord;

/// Storage for template records.
pub trait RecordStore {
    /// Every record, in insertion order.
    fn list_all(&self) -> Result<Vec<TemplateRecord>>;

    /// Append a new record. Fails with `DuplicateId` if the id is taken.
    fn add(&mut self, record: TemplateRecord) -> Result<()>;

    /// Replace the record with the same id.
    ///
    /// `id` and `created_at` are kept from the stored record and
    /// `updated_at` is advanced. Fails with `NotFound` if the id is absent.
    fn update(&mut self, record: TemplateRecord) -> Result<TemplateRecord>;

    /// Delete a record by id, returning it. Fails with `NotFound`.
    fn remove(&mut self, id: &str) -> Result<TemplateRecord>;

    /// Replace the whole collection.
    fn replace_all(&mut self, records: Vec<TemplateRecord>) -> Result<()>;

    /// Look up a single record by id.
    fn get(&self, id: &str) -> Result<TemplateRecord> {
        self.list_all()?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| PromptError::NotFound(id.to_string()))
    }
}

// ============================================================================
// Collection operations shared by the implementations
// ============================================================================

fn require_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(PromptError::ValidationError(
            "template id must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn add_to(records: &mut Vec<TemplateRecord>, record: TemplateRecord) -> Result<()> {
    require_id(&record.id)?;
    if records.iter().any(|r| r.id == record.id) {
        return Err(PromptError::DuplicateId(record.id));
    }
    records.push(record);
    Ok(())
}

fn update_in(
    records: &mut [TemplateRecord],
    mut record: TemplateRecord,
) -> Result<TemplateRecord> {
    require_id(&record.id)?;
    let Some(existing) = records.iter_mut().find(|r| r.id == record.id) else {
        return Err(PromptError::NotFound(record.id));
    };

    record.created_at = existing.created_at;
    record.updated_at = existing.updated_at;
    record.touch();
    *existing = record.clone();
    Ok(record)
}

fn remove_from(records: &mut Vec<TemplateRecord>, id: &str) -> Result<TemplateRecord> {
    require_id(id)?;
    let index = records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| PromptError::NotFound(id.to_string()))?;
    Ok(records.remove(index))
}

fn check_unique_ids(records: &[TemplateRecord]) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for record in records {
        require_id(&record.id)?;
        if !seen.insert(record.id.as_str()) {
            return Err(PromptError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
