//! Implementation of the `promptlib edit` command.

use super::{open_library, read_file};
use crate::cli::EditArgs;
use crate::error::{PromptError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::store::RecordStore;
use crate::template::{TemplatePatch, parse_tags};
use serde_json::json;

/// Execute the `promptlib edit` command.
///
/// A new body is canonicalized against the template's variables and, like
/// `forge`, needs `--yes` when some variable loses its placeholder.
pub fn cmd_edit(args: EditArgs) -> Result<()> {
    let mut library = open_library()?;
    let current = library.store.get(&args.id)?;

    let patch = TemplatePatch {
        title: args.title,
        description: args.description,
        category: args.category,
        tags: args.tags.as_deref().map(parse_tags),
        base_prompt: args.body.as_deref().map(read_file).transpose()?,
        defaults: args.defaults,
    };

    if patch.is_empty() {
        return Err(PromptError::UserError(
            "nothing to change; pass at least one of --title, --description, --category, --tags, --body, --default".to_string(),
        ));
    }

    let (updated, unknown) = patch.apply(&current);
    if !unknown.is_empty() {
        return Err(PromptError::UserError(format!(
            "template '{}' has no variable(s): {}",
            current.id,
            unknown.join(", ")
        )));
    }
    if updated.title.is_empty() {
        return Err(PromptError::ValidationError("Title is required.".to_string()));
    }
    if updated.base_prompt.is_empty() {
        return Err(PromptError::ValidationError(
            "Base Prompt content is required.".to_string(),
        ));
    }

    if library.config.warn_missing_placeholders {
        let missing = updated.missing_placeholders();
        if !missing.is_empty() && !args.yes {
            return Err(PromptError::ValidationError(format!(
                "variables without a placeholder in the base prompt: {}\nRe-run with --yes to save anyway.",
                missing.join(", ")
            )));
        }
    }

    let saved = library.store.update(updated)?;

    let event = Event::new(EventAction::Update)
        .with_template(&saved.id)
        .with_details(json!({
            "title": saved.title,
            "body_changed": saved.base_prompt != current.base_prompt,
        }));
    record_event(&library.ctx, &library.config, &event)?;

    println!("Updated template: {}", saved.id);
    Ok(())
}
