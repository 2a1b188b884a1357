//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{PromptError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not a mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PromptError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `library_file` must be a plain, non-hidden file name
    /// - `id_prefix` must be non-empty and contain no whitespace
    /// - `summary_max_chars` must leave room for the `...` marker
    pub fn validate(&self) -> Result<()> {
        let file = &self.library_file;
        if file.is_empty()
            || file.contains('/')
            || file.contains('\\')
            || file.contains("..")
            || file.starts_with('.')
        {
            return Err(PromptError::UserError(format!(
                "config validation failed: library_file must be a plain file name (found '{}')",
                file
            )));
        }

        if self.id_prefix.is_empty() || self.id_prefix.chars().any(char::is_whitespace) {
            return Err(PromptError::UserError(format!(
                "config validation failed: id_prefix must be non-empty without whitespace (found '{}')",
                self.id_prefix
            )));
        }

        if self.summary_max_chars <= 3 {
            return Err(PromptError::UserError(
                "config validation failed: summary_max_chars must be greater than 3".to_string(),
            ));
        }

        Ok(())
    }
}
