//! Implementations of the read-only `list`, `search`, and `show` commands.

use super::{open_library, print_record};
use crate::cli::{ListArgs, SearchArgs, ShowArgs};
use crate::error::Result;
use crate::search::{ListFilter, filter, summarize};
use crate::store::RecordStore;
use crate::template::TemplateRecord;

/// Execute the `promptlib list` command.
pub fn cmd_list(args: ListArgs) -> Result<()> {
    let library = open_library()?;
    let list_filter = ListFilter::new(args.category.as_deref(), args.tag.as_deref())?;

    let records = library.store.list_all()?;
    let shown: Vec<&TemplateRecord> = records.iter().filter(|r| list_filter.matches(r)).collect();

    if records.is_empty() {
        println!("No prompts found. Create one with `promptlib forge <FILE>`.");
        return Ok(());
    }

    print!("{}", render_cards(&shown, library.config.summary_max_chars));
    Ok(())
}

/// Execute the `promptlib search` command.
pub fn cmd_search(args: SearchArgs) -> Result<()> {
    let library = open_library()?;
    let records = library.store.list_all()?;
    let found = filter(&records, args.term.trim());

    print!("{}", render_cards(&found, library.config.summary_max_chars));
    Ok(())
}

/// Execute the `promptlib show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let library = open_library()?;
    let record = library.store.get(&args.id)?;
    print_record(&record);
    Ok(())
}

/// One card per record: title, id, category, summary, and tags.
fn render_cards(records: &[&TemplateRecord], summary_max_chars: usize) -> String {
    if records.is_empty() {
        return "No prompts match.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&format!("{}  [{}]\n", record.title, record.id));
        if !record.category.is_empty() {
            out.push_str(&format!("  Category: {}\n", record.category));
        }
        out.push_str(&format!(
            "  {}\n",
            summarize(&record.description, summary_max_chars)
        ));
        if !record.tags.is_empty() {
            out.push_str(&format!("  Tags: {}\n", record.tags.join(", ")));
        }
        out.push('\n');
    }
    out.push_str(&format!("{} prompt(s)\n", records.len()));
    out
}
