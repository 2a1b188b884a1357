//! Template record model for promptlib.
//!
//! A `TemplateRecord` is the unit stored in the library: a canonical base
//! prompt plus its ordered variables and display metadata. Records
//! serialize in camelCase with epoch-millisecond timestamps so exported
//! documents look like this:
//!
//! ```text
//! {
//!   "id": "prompt-1687190400000-k3j9x0a1b",
//!   "title": "Generate Python Function",
//!   "description": "Creates a Python function stub.",
//!   "category": "Coding",
//!   "tags": ["python", "function"],
//!   "basePrompt": "Write a Python function that {task_description}.",
//!   "variables": [{ "name": "task_description", "defaultValue": "" }],
//!   "createdAt": 1687190400000,
//!   "updatedAt": 1687190400000
//! }
//! ```

use crate::placeholder::{VariableDescriptor, missing_placeholders};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod patch;
#[cfg(test)]
mod tests;

pub use patch::TemplatePatch;

/// Length of the random suffix in generated ids.
const ID_SUFFIX_LEN: usize = 9;

/// A stored, reusable prompt template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    /// Unique identifier, assigned once at creation.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Free-form description.
    #[serde(default)]
    pub description: String,

    /// Category label (e.g. "Coding").
    #[serde(default)]
    pub category: String,

    /// Ordered tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Template body using only `{name}` placeholders.
    pub base_prompt: String,

    /// Ordered variables; names are unique within a record.
    #[serde(default)]
    pub variables: Vec<VariableDescriptor>,

    /// Creation time; never changes.
    #[serde(with = "chrono::serde::ts_milliseconds", default = "now")]
    pub created_at: DateTime<Utc>,

    /// Last mutation time.
    #[serde(with = "chrono::serde::ts_milliseconds", default = "now")]
    pub updated_at: DateTime<Utc>,
}

/// Current time at the millisecond precision records are stored with.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

impl TemplateRecord {
    /// Create a record with a fresh id and both timestamps set to now.
    pub fn new(
        id_prefix: &str,
        title: impl Into<String>,
        base_prompt: impl Into<String>,
        variables: Vec<VariableDescriptor>,
    ) -> Self {
        let created = now();
        Self {
            id: generate_id(id_prefix),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            tags: Vec::new(),
            base_prompt: base_prompt.into(),
            variables,
            created_at: created,
            updated_at: created,
        }
    }

    /// Advance `updated_at`, never leaving it at or before its previous value.
    pub fn touch(&mut self) {
        let current = now();
        self.updated_at = if current > self.updated_at {
            current
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }

    /// Look up a variable by name.
    pub fn variable(&self, name: &str) -> Option<&VariableDescriptor> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Variables whose `{name}` placeholder is absent from the base prompt.
    pub fn missing_placeholders(&self) -> Vec<&str> {
        missing_placeholders(&self.base_prompt, &self.variables)
    }
}

/// Generate a record id: `{prefix}-{epoch_ms}-{random}`.
pub fn generate_id(prefix: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "{}-{}-{}",
        prefix,
        Utc::now().timestamp_millis(),
        &random[..ID_SUFFIX_LEN]
    )
}

/// Split a comma-separated tag string, trimming and dropping empties.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
