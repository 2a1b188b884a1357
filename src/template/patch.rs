//! Partial edits applied to an existing record.

use super::TemplateRecord;
use crate::placeholder::canonicalize;

/// Field-level changes for an existing template.
///
/// `None` leaves a field untouched. A new body is canonicalized against the
/// record's variables (after default changes are applied).
#[derive(Debug, Clone, Default)]
pub struct TemplatePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub base_prompt: Option<String>,
    /// `(name, default)` pairs for variables that already exist.
    pub defaults: Vec<(String, String)>,
}

impl TemplatePatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.tags.is_none()
            && self.base_prompt.is_none()
            && self.defaults.is_empty()
    }

    /// Apply the patch to a copy of `record`.
    ///
    /// Returns the names from `defaults` that matched no variable.
    pub fn apply(&self, record: &TemplateRecord) -> (TemplateRecord, Vec<String>) {
        let mut updated = record.clone();
        let mut unknown = Vec::new();

        if let Some(title) = &self.title {
            updated.title = title.trim().to_string();
        }
        if let Some(description) = &self.description {
            updated.description = description.trim().to_string();
        }
        if let Some(category) = &self.category {
            updated.category = category.trim().to_string();
        }
        if let Some(tags) = &self.tags {
            updated.tags = tags.clone();
        }

        for (name, value) in &self.defaults {
            match updated.variables.iter_mut().find(|v| &v.name == name) {
                Some(variable) => variable.default_value = value.clone(),
                None => unknown.push(name.clone()),
            }
        }

        if let Some(body) = &self.base_prompt {
            updated.base_prompt = canonicalize(body.trim(), &updated.variables);
        }

        (updated, unknown)
    }
}
