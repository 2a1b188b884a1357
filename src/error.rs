//! Error types for the promptlib CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptlib operations.
///
/// Each variant maps to a specific exit code. Errors are handled at the
/// command boundary; nothing retries automatically.
#[derive(Error, Debug)]
pub enum PromptError {
    /// User provided invalid arguments or the library is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A required field is missing or a placeholder check failed.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The store already holds a record with this id.
    #[error("template '{0}' already exists")]
    DuplicateId(String),

    /// The store holds no record with this id.
    #[error("template '{0}' not found")]
    NotFound(String),

    /// The import document is malformed; nothing was imported.
    #[error("Failed to import library: {0}")]
    ImportFormat(String),

    /// The clipboard command could not run or failed.
    #[error("Failed to copy text: {0}")]
    Clipboard(String),
}

impl PromptError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::UserError(_) => exit_codes::USER_ERROR,
            PromptError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            PromptError::DuplicateId(_) | PromptError::NotFound(_) => exit_codes::STORE_CONFLICT,
            PromptError::ImportFormat(_) => exit_codes::IMPORT_FAILURE,
            PromptError::Clipboard(_) => exit_codes::CLIPBOARD_FAILURE,
        }
    }
}

/// Result type alias for promptlib operations.
pub type Result<T> = std::result::Result<T, PromptError>;
