//! Canonicalization of template bodies.

use super::syntax::matchers_for;
use super::variable::VariableDescriptor;
use regex::NoExpand;

/// Rewrite every occurrence of each known variable to the `{name}` form.
///
/// Variables are processed longest name first so a short name cannot eat
/// into a longer placeholder. Bare words are never wrapped; only text already
/// in one of the placeholder syntaxes is rewritten. Running this on its own
/// output returns the same text.
pub fn canonicalize(text: &str, variables: &[VariableDescriptor]) -> String {
    let mut ordered: Vec<&VariableDescriptor> = variables.iter().collect();
    ordered.sort_by(|a, b| b.name.len().cmp(&a.name.len()));

    let mut working = text.to_string();
    for variable in ordered {
        if variable.name.is_empty() {
            continue;
        }
        let canonical = variable.placeholder();
        for matcher in matchers_for(&variable.name) {
            working = matcher
                .replace_all(&working, NoExpand(&canonical))
                .into_owned();
        }
    }

    working
}

/// Names of variables whose `{name}` placeholder does not appear in `text`.
pub fn missing_placeholders<'a>(text: &str, variables: &'a [VariableDescriptor]) -> Vec<&'a str> {
    variables
        .iter()
        .filter(|v| !text.contains(&v.placeholder()))
        .map(|v| v.name.as_str())
        .collect()
}
