//! Rendering canonical templates into final text.

use super::variable::VariableDescriptor;
use std::collections::HashMap;

/// Substitute variable values into a canonical template.
///
/// Every variable is processed in order, using `overrides[name]` when
/// present and the variable's default value otherwise. Only the exact
/// `{name}` form is replaced; placeholders for names not in `variables`
/// survive verbatim.
pub fn assemble(
    base_prompt: &str,
    variables: &[VariableDescriptor],
    overrides: &HashMap<String, String>,
) -> String {
    let mut working = base_prompt.to_string();

    for variable in variables {
        let value = overrides
            .get(&variable.name)
            .map(String::as_str)
            .unwrap_or(&variable.default_value);
        working = working.replace(&variable.placeholder(), value);
    }

    working
}
