//! Implementation of the `promptlib remove` command.

use super::open_library;
use crate::cli::RemoveArgs;
use crate::error::Result;
use crate::events::{Event, EventAction, record_event};
use crate::store::RecordStore;
use serde_json::json;

/// Execute the `promptlib remove` command.
pub fn cmd_remove(args: RemoveArgs) -> Result<()> {
    let mut library = open_library()?;
    let removed = library.store.remove(&args.id)?;

    let event = Event::new(EventAction::Remove)
        .with_template(&removed.id)
        .with_details(json!({ "title": removed.title }));
    record_event(&library.ctx, &library.config, &event)?;

    println!("Removed template: {} ({})", removed.id, removed.title);
    Ok(())
}
