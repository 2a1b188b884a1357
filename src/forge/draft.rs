//! Editable authoring state.

use crate::placeholder::{VariableDescriptor, extract};

/// Everything the author has entered so far.
///
/// `base_prompt` starts as a copy of the raw text and is what gets saved;
/// later edits to it replace the copy outright.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub raw_text: String,
    pub base_prompt: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma-separated tags as typed.
    pub tags: String,
    pub variables: Vec<VariableDescriptor>,
}

impl Draft {
    /// Build a draft from pasted raw text.
    ///
    /// Category and tags are left empty.
    pub fn from_raw(raw: &str, description_fallback_chars: usize) -> Self {
        Self {
            raw_text: raw.to_string(),
            base_prompt: raw.to_string(),
            title: derive_title(raw),
            description: derive_description(raw, description_fallback_chars),
            category: String::new(),
            tags: String::new(),
            variables: extract(raw),
        }
    }
}

/// The first line, trimmed.
pub fn derive_title(raw: &str) -> String {
    raw.split('\n').next().unwrap_or_default().trim().to_string()
}

/// Lines 2-3 when line 2 has content, else the first `fallback_chars`
/// characters of the raw text.
pub fn derive_description(raw: &str, fallback_chars: usize) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();
    if let Some(second) = lines.get(1)
        && !second.trim().is_empty()
    {
        let end = lines.len().min(3);
        return lines[1..end].join("\n").trim().to_string();
    }
    raw.chars().take(fallback_chars).collect()
}
