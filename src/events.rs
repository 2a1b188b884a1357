//! Audit log for promptlib.
//!
//! Every mutation of the library is appended to `.promptlib/events/events.ndjson`
//! as one JSON object per line:
//! - `ts`: RFC3339 timestamp
//! - `action`: what happened (init, add, update, remove, import, export, copy)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `template`: optional template id
//! - `details`: freeform object with action-specific details
//!
//! The log is written after the store write succeeds, so it never records a
//! mutation that did not happen. Set `audit_log: false` in `config.yaml` to
//! turn it off.

use crate::config::Config;
use crate::context::LibraryContext;
use crate::error::{PromptError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Library created
    Init,
    /// Template added
    Add,
    /// Template edited
    Update,
    /// Template deleted
    Remove,
    /// Collection replaced from a file
    Import,
    /// Collection written to an export file
    Export,
    /// Assembled text sent to the clipboard
    Copy,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Init => write!(f, "init"),
            EventAction::Add => write!(f, "add"),
            EventAction::Update => write!(f, "update"),
            EventAction::Remove => write!(f, "remove"),
            EventAction::Import => write!(f, "import"),
            EventAction::Export => write!(f, "export"),
            EventAction::Copy => write!(f, "copy"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// Who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Template id for template-specific events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Action-specific details.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            template: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the template id for this event.
    pub fn with_template(mut self, id: impl Into<String>) -> Self {
        self.template = Some(id.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PromptError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event unless the audit log is disabled in `config`.
pub fn record_event(ctx: &LibraryContext, config: &Config, event: &Event) -> Result<()> {
    if !config.audit_log {
        return Ok(());
    }
    append_event(ctx, event)
}

/// Append an event to the audit log, creating the file if needed.
pub fn append_event(ctx: &LibraryContext, event: &Event) -> Result<()> {
    let json_line = event.to_ndjson_line()?;

    let events_dir = ctx.events_dir();
    fs::create_dir_all(&events_dir).map_err(|e| {
        PromptError::UserError(format!(
            "failed to create events directory '{}': {}",
            events_dir.display(),
            e
        ))
    })?;

    let events_file = ctx.events_file();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            PromptError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        PromptError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })
}
