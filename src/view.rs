//! Fill-in view for a stored template.
//!
//! Holds one record plus the values the user has typed so far and renders
//! the final prompt text on demand.

use crate::error::{PromptError, Result};
use crate::placeholder::assemble;
use crate::template::TemplateRecord;
use std::collections::HashMap;

/// Defaults longer than this are edited as multi-line text.
const MULTILINE_THRESHOLD: usize = 80;

/// A loaded template with per-variable overrides.
#[derive(Debug, Clone)]
pub struct TemplateView {
    record: TemplateRecord,
    overrides: HashMap<String, String>,
}

impl TemplateView {
    pub fn new(record: TemplateRecord) -> Self {
        Self {
            record,
            overrides: HashMap::new(),
        }
    }

    pub fn record(&self) -> &TemplateRecord {
        &self.record
    }

    /// Override the value of a variable.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if self.record.variable(name).is_none() {
            let known: Vec<&str> = self
                .record
                .variables
                .iter()
                .map(|v| v.name.as_str())
                .collect();
            return Err(PromptError::UserError(format!(
                "template '{}' has no variable '{}' (variables: {})",
                self.record.id,
                name,
                if known.is_empty() {
                    "none".to_string()
                } else {
                    known.join(", ")
                }
            )));
        }
        self.overrides.insert(name.to_string(), value.into());
        Ok(())
    }

    /// The prompt text with every variable substituted.
    pub fn assembled(&self) -> String {
        assemble(
            &self.record.base_prompt,
            &self.record.variables,
            &self.overrides,
        )
    }
}

/// Human-readable label for a variable name.
///
/// Underscores become spaces and each word starts with a capital letter:
/// `task_description` renders as `Task Description`.
///
/// # Note
///
/// Only the first letter of each word is upper-cased; the rest keep their
/// case. Labels are not shouted in all capitals (`TASK DESCRIPTION`).
pub fn display_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Whether a default value should be edited as multi-line text.
pub fn prefers_multiline(default_value: &str) -> bool {
    default_value.chars().count() > MULTILINE_THRESHOLD || default_value.contains('\n')
}
