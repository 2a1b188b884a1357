//! Config struct definition and defaults.

use serde::{Deserialize, Serialize};

/// Configuration for a prompt library.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Storage
    // =========================================================================
    /// File name of the serialized collection inside `.promptlib/`.
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// Prefix for generated template ids.
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    // =========================================================================
    // Authoring
    // =========================================================================
    /// Characters of raw text used as the description when none can be derived.
    #[serde(default = "default_description_fallback_chars")]
    pub description_fallback_chars: usize,

    /// Whether to check that every variable has a `{name}` placeholder on save.
    #[serde(default = "default_true")]
    pub warn_missing_placeholders: bool,

    // =========================================================================
    // Display
    // =========================================================================
    /// Maximum description length in list output (longer text gets `...`).
    #[serde(default = "default_summary_max_chars")]
    pub summary_max_chars: usize,

    // =========================================================================
    // Import / export
    // =========================================================================
    /// File name prefix for exported libraries.
    #[serde(default = "default_export_prefix")]
    pub export_prefix: String,

    // =========================================================================
    // Integrations
    // =========================================================================
    /// Command that receives text on stdin for `fill --copy` (empty disables).
    #[serde(default)]
    pub clipboard_command: String,

    /// Whether to append mutations to `events/events.ndjson`.
    #[serde(default = "default_true")]
    pub audit_log: bool,
}

fn default_library_file() -> String {
    "library.json".to_string()
}
fn default_id_prefix() -> String {
    "prompt".to_string()
}
fn default_description_fallback_chars() -> usize {
    100
}
fn default_summary_max_chars() -> usize {
    120
}
fn default_export_prefix() -> String {
    "prompt_library_backup".to_string()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            id_prefix: default_id_prefix(),
            description_fallback_chars: default_description_fallback_chars(),
            warn_missing_placeholders: true,
            summary_max_chars: default_summary_max_chars(),
            export_prefix: default_export_prefix(),
            clipboard_command: String::new(),
            audit_log: true,
        }
    }
}
