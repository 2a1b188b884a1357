//! Implementation of the `promptlib forge` command.
//!
//! Drives a [`Forge`] from command-line flags: the raw text seeds the draft,
//! then flags adjust it in a fixed order (metadata, renames, removed
//! variables, added variables, defaults, body) before the draft is
//! finalized and saved.
//!
//! `--dry-run` saves into an in-memory copy of the library, so it reports
//! the same errors a real save would without touching the file.

use super::{open_library, print_record, read_file, read_source};
use crate::cli::ForgeArgs;
use crate::error::{PromptError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::forge::{FinalizedTemplate, Forge};
use crate::store::{MemoryStore, RecordStore};
use serde_json::json;

/// Execute the `promptlib forge` command.
pub fn cmd_forge(args: ForgeArgs) -> Result<()> {
    let raw = read_source(&args.source)?;
    let library = open_library()?;

    if args.dry_run {
        let preview = MemoryStore::with_records(library.store.list_all()?)?;
        let mut forge = Forge::new(preview, &library.config);
        let finalized = build_draft(&mut forge, &raw, &args)?;

        let record = forge.save(finalized, true)?;
        print_record(&record);
        println!();
        println!(
            "Dry run: template not saved (library would hold {} template(s)).",
            forge.store().list_all()?.len()
        );
        return Ok(());
    }

    let mut forge = Forge::new(library.store, &library.config);
    let finalized = build_draft(&mut forge, &raw, &args)?;
    let record = forge.save(finalized, args.yes)?;

    let event = Event::new(EventAction::Add)
        .with_template(&record.id)
        .with_details(json!({
            "title": record.title,
            "variables": record.variables.iter().map(|v| &v.name).collect::<Vec<_>>(),
        }));
    record_event(&library.ctx, &library.config, &event)?;

    println!("Created template: {}", record.id);
    println!();
    println!("  Title:     {}", record.title);
    println!("  Variables: {}", record.variables.len());
    println!();
    println!("Fill it in with `promptlib fill {}`.", record.id);

    Ok(())
}

/// Seed the draft from `raw`, apply every flag, and finalize it.
fn build_draft<S: RecordStore>(
    forge: &mut Forge<S>,
    raw: &str,
    args: &ForgeArgs,
) -> Result<FinalizedTemplate> {
    forge.set_raw_text(raw);

    if let Some(title) = &args.title {
        forge.set_title(title.clone());
    }
    if let Some(description) = &args.description {
        forge.set_description(description.clone());
    }
    if let Some(category) = &args.category {
        forge.set_category(category.clone());
    }
    if let Some(tags) = &args.tags {
        forge.set_tags(tags.clone());
    }

    for (old, new) in &args.renames {
        let index = variable_index(forge, old)?;
        forge.rename_variable(index, new)?;
    }

    for name in &args.remove_vars {
        let index = variable_index(forge, name)?;
        let removed = forge.remove_variable(index)?;
        println!("Removed variable: {{{}}}", removed.name);
    }

    for _ in 0..args.add_vars {
        let name = forge.add_variable();
        println!("Added variable: {{{}}}", name);
    }

    for (name, value) in &args.defaults {
        let index = variable_index(forge, name)?;
        forge.set_default(index, value.clone())?;
    }

    if let Some(body) = &args.body {
        forge.set_base_prompt(read_file(body)?);
    }

    let finalized = forge.finalize()?;

    if !finalized.missing.is_empty() {
        eprintln!(
            "Warning: some variables have no placeholder in the base prompt: {}",
            finalized.missing.join(", ")
        );
        if !args.yes && !args.dry_run {
            eprintln!("Re-run with --yes to save anyway.");
        }
    }

    Ok(finalized)
}

fn variable_index<S: RecordStore>(forge: &Forge<S>, name: &str) -> Result<usize> {
    forge.variable_index(name).ok_or_else(|| {
        let known: Vec<&str> = forge
            .draft()
            .variables
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        PromptError::UserError(format!(
            "no variable named '{}' (detected: {})",
            name,
            if known.is_empty() {
                "none".to_string()
            } else {
                known.join(", ")
            }
        ))
    })
}
