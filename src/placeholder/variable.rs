//! Variable descriptors attached to templates.

use serde::{Deserialize, Serialize};

/// One substitutable slot in a template.
///
/// Serialized in camelCase so stored libraries stay compatible with exported
/// documents (`{"name": "...", "defaultValue": "..."}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDescriptor {
    /// Variable name; identity is case-sensitive.
    pub name: String,

    /// Value used when no override is supplied.
    #[serde(default)]
    pub default_value: String,
}

impl VariableDescriptor {
    /// Create a descriptor with an empty default value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: String::new(),
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// The canonical placeholder for this variable, e.g. `{topic}`.
    pub fn placeholder(&self) -> String {
        format!("{{{}}}", self.name)
    }
}
