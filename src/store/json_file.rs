//! JSON-file record store.
//!
//! The whole collection is one JSON array. Each operation reads the file,
//! mutates the collection in memory, and writes it back atomically.

use super::{RecordStore, add_to, check_unique_ids, remove_from, update_in};
use crate::error::{PromptError, Result};
use crate::fs::atomic_write_file;
use crate::template::TemplateRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A record store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection.
    ///
    /// A missing file is an empty collection. So is a file that does not
    /// parse; a warning is printed to stderr and the file is left in place
    /// until the next write.
    fn load(&self) -> Result<Vec<TemplateRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(PromptError::UserError(format!(
                    "failed to read library '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                eprintln!(
                    "Warning: could not parse library '{}' ({}); treating it as empty",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, records: &[TemplateRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(|e| {
            PromptError::UserError(format!("failed to serialize library: {}", e))
        })?;
        atomic_write_file(&self.path, &format!("{}\n", json))
    }
}

impl RecordStore for JsonFileStore {
    fn list_all(&self) -> Result<Vec<TemplateRecord>> {
        self.load()
    }

    fn add(&mut self, record: TemplateRecord) -> Result<()> {
        let mut records = self.load()?;
        add_to(&mut records, record)?;
        self.save(&records)
    }

    fn update(&mut self, record: TemplateRecord) -> Result<TemplateRecord> {
        let mut records = self.load()?;
        let updated = update_in(&mut records, record)?;
        self.save(&records)?;
        Ok(updated)
    }

    fn remove(&mut self, id: &str) -> Result<TemplateRecord> {
        let mut records = self.load()?;
        let removed = remove_from(&mut records, id)?;
        self.save(&records)?;
        Ok(removed)
    }

    fn replace_all(&mut self, records: Vec<TemplateRecord>) -> Result<()> {
        check_unique_ids(&records)?;
        self.save(&records)
    }
}
