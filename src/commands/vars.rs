//! Implementation of the `promptlib vars` command.
//!
//! A read-only preview of what `forge` would detect. Works without an
//! initialized library.

use super::read_source;
use crate::cli::VarsArgs;
use crate::error::Result;
use crate::placeholder::{PlaceholderMatch, VariableDescriptor, canonicalize, extract, scan};
use crate::view::display_label;

/// Execute the `promptlib vars` command.
pub fn cmd_vars(args: VarsArgs) -> Result<()> {
    let raw = read_source(&args.source)?;
    print!("{}", render_vars(&raw));
    Ok(())
}

fn render_vars(raw: &str) -> String {
    let variables = extract(raw);
    let occurrences = scan(raw);
    let mut out = String::new();

    if variables.is_empty() {
        out.push_str("No variables detected.\n");
        return out;
    }

    out.push_str(&format!("Detected {} variable(s):\n", variables.len()));
    for variable in &variables {
        out.push_str(&describe(variable, &occurrences));
    }
    out.push('\n');
    out.push_str("Canonical form:\n");
    out.push_str(&canonicalize(raw.trim(), &variables));
    out.push('\n');
    out
}

fn describe(variable: &VariableDescriptor, occurrences: &[PlaceholderMatch]) -> String {
    let forms: Vec<String> = occurrences
        .iter()
        .filter(|m| m.name == variable.name)
        .map(|m| m.syntax.to_string())
        .collect();
    format!(
        "  {:<24} {:<24} ({})\n",
        variable.placeholder(),
        display_label(&variable.name),
        forms.join(", ")
    )
}
