//! Template authoring.
//!
//! A [`Forge`] turns pasted text into a stored template:
//!
//! 1. `set_raw_text` detects variables and pre-fills title and description
//! 2. the author adjusts metadata, variables, and the base prompt
//! 3. `finalize` validates the draft and canonicalizes the base prompt
//! 4. `save` adds the record to the store and clears the draft
//!
//! Saving a template whose variables are not all present as `{name}` in the
//! base prompt needs explicit confirmation.

mod draft;


pub use draft::{Draft, derive_description, derive_title};

use crate::config::Config;
use crate::error::{PromptError, Result};
use crate::placeholder::{
    VariableDescriptor, canonicalize, missing_placeholders, next_manual_name, sanitize_name,
};
use crate::store::RecordStore;
use crate::template::{TemplateRecord, parse_tags};

/// A validated record ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedTemplate {
    pub record: TemplateRecord,
    /// Variables whose `{name}` placeholder is absent from the base prompt.
    pub missing: Vec<String>,
}

/// Authoring controller over an injected record store.
#[derive(Debug)]
pub struct Forge<S: RecordStore> {
    store: S,
    draft: Draft,
    id_prefix: String,
    description_fallback_chars: usize,
    check_placeholders: bool,
}

impl<S: RecordStore> Forge<S> {
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            store,
            draft: Draft::default(),
            id_prefix: config.id_prefix.clone(),
            description_fallback_chars: config.description_fallback_chars,
            check_placeholders: config.warn_missing_placeholders,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the draft with one derived from `raw`.
    pub fn set_raw_text(&mut self, raw: &str) {
        self.draft = Draft::from_raw(raw, self.description_fallback_chars);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.draft.category = category.into();
    }

    /// Set the comma-separated tag string.
    pub fn set_tags(&mut self, tags: impl Into<String>) {
        self.draft.tags = tags.into();
    }

    /// Replace the base prompt buffer with an edited version.
    pub fn set_base_prompt(&mut self, text: impl Into<String>) {
        self.draft.base_prompt = text.into();
    }

    /// Append a manually added variable and return its name.
    pub fn add_variable(&mut self) -> &str {
        let name = next_manual_name(&self.draft.variables);
        self.draft.variables.push(VariableDescriptor::new(name));
        &self.draft.variables[self.draft.variables.len() - 1].name
    }

    /// Rename the variable at `index`. The base prompt is not rewritten.
    pub fn rename_variable(&mut self, index: usize, name: &str) -> Result<()> {
        let sanitized = sanitize_name(name);
        if sanitized.is_empty() {
            return Err(PromptError::ValidationError(
                "variable name must not be empty".to_string(),
            ));
        }
        if self
            .draft
            .variables
            .iter()
            .enumerate()
            .any(|(i, v)| i != index && v.name == sanitized)
        {
            return Err(PromptError::ValidationError(format!(
                "variable '{}' already exists",
                sanitized
            )));
        }
        self.variable_mut(index)?.name = sanitized;
        Ok(())
    }

    pub fn set_default(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        self.variable_mut(index)?.default_value = value.into();
        Ok(())
    }

    pub fn remove_variable(&mut self, index: usize) -> Result<VariableDescriptor> {
        self.check_index(index)?;
        Ok(self.draft.variables.remove(index))
    }

    /// Index of the variable called `name`.
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.draft.variables.iter().position(|v| v.name == name)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.draft.variables.len() {
            return Err(PromptError::UserError(format!(
                "no variable at position {} (draft has {})",
                index + 1,
                self.draft.variables.len()
            )));
        }
        Ok(())
    }

    fn variable_mut(&mut self, index: usize) -> Result<&mut VariableDescriptor> {
        self.check_index(index)?;
        Ok(&mut self.draft.variables[index])
    }

    /// Validate the draft and build the record to store.
    ///
    /// Title and base prompt are required. The base prompt buffer is
    /// trimmed and every known variable is rewritten to `{name}`.
    pub fn finalize(&self) -> Result<FinalizedTemplate> {
        let title = self.draft.title.trim();
        if title.is_empty() {
            return Err(PromptError::ValidationError("Title is required.".to_string()));
        }

        let body = self.draft.base_prompt.trim();
        if body.is_empty() {
            return Err(PromptError::ValidationError(
                "Base Prompt content is required.".to_string(),
            ));
        }

        let variables = self.draft.variables.clone();
        let mut record = TemplateRecord::new(
            &self.id_prefix,
            title,
            canonicalize(body, &variables),
            variables,
        );
        record.description = self.draft.description.trim().to_string();
        record.category = self.draft.category.trim().to_string();
        record.tags = parse_tags(&self.draft.tags);

        let missing = if self.check_placeholders {
            missing_placeholders(&record.base_prompt, &record.variables)
                .into_iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        Ok(FinalizedTemplate { record, missing })
    }

    /// Store a finalized template and clear the draft.
    ///
    /// Missing placeholders must be confirmed; otherwise nothing is stored
    /// and the draft is kept.
    pub fn save(
        &mut self,
        finalized: FinalizedTemplate,
        confirm_missing: bool,
    ) -> Result<TemplateRecord> {
        if !finalized.missing.is_empty() && !confirm_missing {
            return Err(PromptError::ValidationError(format!(
                "variables without a placeholder in the base prompt: {}",
                finalized
                    .missing
                    .iter()
                    .map(|name| format!("{{{}}}", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        self.store.add(finalized.record.clone())?;
        self.draft = Draft::default();
        Ok(finalized.record)
    }
}
