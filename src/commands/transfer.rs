//! Implementations of the `export` and `import` commands.

use super::{open_library, read_file};
use crate::cli::{ExportArgs, ImportArgs};
use crate::error::{PromptError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::fs::atomic_write_file;
use crate::store::{RecordStore, export_document, export_filename, parse_import};
use chrono::Utc;
use serde_json::json;
use std::path::PathBuf;

/// Execute the `promptlib export` command.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let library = open_library()?;
    let records = library.store.list_all()?;

    if records.is_empty() {
        return Err(PromptError::UserError("No prompts to export.".to_string()));
    }

    let path = args.output.unwrap_or_else(|| {
        PathBuf::from(export_filename(&library.config.export_prefix, Utc::now()))
    });
    atomic_write_file(&path, &export_document(&records)?)?;

    let event = Event::new(EventAction::Export).with_details(json!({
        "path": path.display().to_string(),
        "count": records.len(),
    }));
    record_event(&library.ctx, &library.config, &event)?;

    println!("Exported {} prompt(s) to {}", records.len(), path.display());
    Ok(())
}

/// Execute the `promptlib import` command.
///
/// The file is fully validated before the library is touched. Without
/// `--yes` nothing is written.
pub fn cmd_import(args: ImportArgs) -> Result<()> {
    let mut library = open_library()?;
    let incoming = parse_import(&read_file(&args.file)?)?;
    let current = library.store.list_all()?;

    if !args.yes {
        println!(
            "Import would replace {} existing prompt(s) with {} prompt(s) from {}.",
            current.len(),
            incoming.len(),
            args.file.display()
        );
        println!("This cannot be undone. Re-run with --yes to replace the library.");
        return Ok(());
    }

    let count = incoming.len();
    library.store.replace_all(incoming)?;

    let event = Event::new(EventAction::Import).with_details(json!({
        "path": args.file.display().to_string(),
        "replaced": current.len(),
        "imported": count,
    }));
    record_event(&library.ctx, &library.config, &event)?;

    println!("Imported {} prompt(s) from {}", count, args.file.display());
    Ok(())
}
