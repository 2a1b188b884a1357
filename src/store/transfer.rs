//! Import and export documents.
//!
//! An export is the whole collection as a pretty-printed JSON array, the
//! same shape as the library file. Imports are validated before anything
//! touches the store.

use super::check_unique_ids;
use crate::error::{PromptError, Result};
use crate::template::TemplateRecord;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Fields the first imported entry must carry.
const REQUIRED_FIELDS: [&str; 3] = ["id", "title", "basePrompt"];

/// Parse and validate an import document.
///
/// The document must be a JSON array. When non-empty, its first element is
/// checked for the required fields before the whole array is read as
/// records. Ids must be non-empty and unique. An empty array is a valid
/// (empty) library.
pub fn parse_import(json: &str) -> Result<Vec<TemplateRecord>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| PromptError::ImportFormat(format!("invalid JSON: {}", e)))?;

    let Value::Array(entries) = &value else {
        return Err(PromptError::ImportFormat(
            "Expected an array of prompts".to_string(),
        ));
    };

    if let Some(first) = entries.first() {
        let missing: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| first.get(field).is_none_or(Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(PromptError::ImportFormat(format!(
                "Invalid prompt format: first entry is missing {}",
                missing.join(", ")
            )));
        }
    }

    let records: Vec<TemplateRecord> = serde_json::from_value(value)
        .map_err(|e| PromptError::ImportFormat(format!("invalid prompt entry: {}", e)))?;

    check_unique_ids(&records).map_err(|e| match e {
        PromptError::DuplicateId(id) => {
            PromptError::ImportFormat(format!("duplicate prompt id '{}'", id))
        }
        other => PromptError::ImportFormat(other.to_string()),
    })?;

    Ok(records)
}

/// Render the collection as an export document.
pub fn export_document(records: &[TemplateRecord]) -> Result<String> {
    serde_json::to_string_pretty(records)
        .map_err(|e| PromptError::UserError(format!("failed to serialize library: {}", e)))
}

/// File name for an export taken at `now`.
///
/// `{prefix}_{timestamp}.json`, where the timestamp is ISO-8601 with
/// millisecond precision and `:`/`.` replaced by `-`.
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    let stamp = now
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
        .replace([':', '.'], "-");
    format!("{}_{}.json", prefix, stamp)
}
