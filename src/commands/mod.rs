//! Command implementations for promptlib.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share for opening the library
//! and reading input files.

mod browse;
mod edit;
mod fill;
mod forge;
mod init;
mod remove;
mod transfer;
mod vars;

use crate::cli::Command;
use crate::config::Config;
use crate::context::{LibraryContext, require_initialized_library};
use crate::error::{PromptError, Result};
use crate::store::JsonFileStore;
use crate::template::TemplateRecord;
use crate::view::{display_label, prefers_multiline};
use std::fs;
use std::io;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Init => init::cmd_init(),
        Command::Forge(args) => forge::cmd_forge(args),
        Command::Vars(args) => vars::cmd_vars(args),
        Command::List(args) => browse::cmd_list(args),
        Command::Search(args) => browse::cmd_search(args),
        Command::Show(args) => browse::cmd_show(args),
        Command::Fill(args) => fill::cmd_fill(args),
        Command::Edit(args) => edit::cmd_edit(args),
        Command::Remove(args) => remove::cmd_remove(args),
        Command::Export(args) => transfer::cmd_export(args),
        Command::Import(args) => transfer::cmd_import(args),
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// An opened, initialized library.
struct Library {
    ctx: LibraryContext,
    config: Config,
    store: JsonFileStore,
}

fn open_library() -> Result<Library> {
    let ctx = require_initialized_library()?;
    let config = ctx.load_config()?;
    let store = JsonFileStore::new(ctx.library_path(&config));
    Ok(Library { ctx, config, store })
}

/// Read raw text from a file, or from stdin when `source` is `-`.
fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        return io::read_to_string(io::stdin())
            .map_err(|e| PromptError::UserError(format!("failed to read stdin: {}", e)));
    }
    read_file(Path::new(source))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        PromptError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })
}

/// Print the fields of a record shared by `show`, `forge`, and `edit`.
fn print_record(record: &TemplateRecord) {
    println!("================================================================================");
    println!("{}", record.title);
    println!("================================================================================");
    println!();
    println!("Id:          {}", record.id);
    if !record.category.is_empty() {
        println!("Category:    {}", record.category);
    }
    if record.tags.is_empty() {
        println!("Tags:        No tags.");
    } else {
        println!("Tags:        {}", record.tags.join(", "));
    }
    println!(
        "Created:     {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "Updated:     {}",
        record.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!("Description:");
    if record.description.is_empty() {
        println!("  No description provided.");
    } else {
        for line in record.description.lines() {
            println!("  {}", line);
        }
    }
    println!();
    println!("Variables:");
    if record.variables.is_empty() {
        println!("  No configurable variables for this prompt.");
    }
    for variable in &record.variables {
        let label = display_label(&variable.name);
        if variable.default_value.is_empty() {
            println!("  {:<24} {}", variable.placeholder(), label);
        } else if prefers_multiline(&variable.default_value) {
            println!("  {:<24} {} (default):", variable.placeholder(), label);
            for line in variable.default_value.lines() {
                println!("      {}", line);
            }
        } else {
            println!(
                "  {:<24} {} (default: {})",
                variable.placeholder(),
                label,
                variable.default_value
            );
        }
    }
    println!();
    println!("Base prompt:");
    println!("--------------------------------------------------------------------------------");
    println!("{}", record.base_prompt);
    println!("--------------------------------------------------------------------------------");
}
