//! Placeholder detection in raw text.

use super::syntax::{PlaceholderSyntax, SCANNERS};
use super::variable::VariableDescriptor;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// One placeholder occurrence found in raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMatch {
    /// The variable name inside the placeholder.
    pub name: String,
    /// Byte offset of the start of the placeholder.
    pub offset: usize,
    /// Which syntax matched.
    pub syntax: PlaceholderSyntax,
}

/// Find every placeholder occurrence, sorted by offset.
///
/// Each syntax is scanned independently; the merged list is sorted with a
/// stable sort so ties keep scan order. Unterminated or malformed markers
/// simply do not match.
pub fn scan(raw: &str) -> Vec<PlaceholderMatch> {
    let mut matches = Vec::new();

    for (regex, syntax) in SCANNERS.iter() {
        for caps in regex.captures_iter(raw) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            matches.push(PlaceholderMatch {
                name: name.as_str().to_string(),
                offset: whole.start(),
                syntax: *syntax,
            });
        }
    }

    matches.sort_by_key(|m| m.offset);
    matches
}

/// Extract the distinct variables of `raw` in order of first appearance.
///
/// Default values are always empty at this stage.
pub fn extract(raw: &str) -> Vec<VariableDescriptor> {
    let mut seen = HashSet::new();
    scan(raw)
        .into_iter()
        .filter(|m| seen.insert(m.name.clone()))
        .map(|m| VariableDescriptor::new(m.name))
        .collect()
}

/// Sanitize a user-entered variable name.
///
/// Trims the name and collapses each internal whitespace run to `_`.
pub fn sanitize_name(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name.trim(), "_").into_owned()
}

/// Generate a name for a manually added variable.
///
/// Starts at `newVariable{len + 1}` and counts up past any existing name.
pub fn next_manual_name(existing: &[VariableDescriptor]) -> String {
    let mut n = existing.len() + 1;
    loop {
        let candidate = format!("newVariable{}", n);
        if !existing.iter().any(|v| v.name == candidate) {
            return candidate;
        }
        n += 1;
    }
}
