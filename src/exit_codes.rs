//! Exit code constants for the promptlib CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, I/O failure, uninitialized library)
//! - 2: Validation failure (missing title/body, missing placeholders)
//! - 3: Store conflict (duplicate id, record not found)
//! - 4: Import file rejected
//! - 5: Clipboard copy failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or an uninitialized library.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a required field is missing or placeholders are absent.
pub const VALIDATION_FAILURE: i32 = 2;

/// Store conflict: the target record id collides or does not exist.
pub const STORE_CONFLICT: i32 = 3;

/// Import failure: the import document is malformed.
pub const IMPORT_FAILURE: i32 = 4;

/// Clipboard failure: the copy command could not run or failed.
pub const CLIPBOARD_FAILURE: i32 = 5;
