//! Placeholder syntaxes and their matchers.
//!
//! Every syntax is described once by [`PlaceholderSyntax::pattern`] and used
//! two ways: with a capturing name class to scan raw text, and with an escaped
//! literal name to rewrite one known variable.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Name class accepted by the brace and bracket forms.
const NAME_CLASS: &str = "[A-Za-z0-9_]+";

/// Name class accepted when scanning for the double-underscore form.
///
/// Restricted to upper case so identifiers like `__init__` in code samples are
/// not mistaken for variables.
const UPPER_NAME_CLASS: &str = "[A-Z0-9_]+";

/// A concrete placeholder syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderSyntax {
    /// `{name}`, with optional whitespace inside the braces.
    Brace,
    /// `__NAME__`.
    DoubleUnderscore,
    /// `\[name\]` with literal backslashes, as left behind by markdown escaping.
    EscapedBracket,
}

impl PlaceholderSyntax {
    /// All syntaxes in scan order.
    pub const ALL: [PlaceholderSyntax; 3] = [
        PlaceholderSyntax::Brace,
        PlaceholderSyntax::DoubleUnderscore,
        PlaceholderSyntax::EscapedBracket,
    ];

    /// Build the regex source for this syntax wrapped around `name`.
    ///
    /// `name` is a regex fragment; it becomes capture group 1.
    pub fn pattern(self, name: &str) -> String {
        match self {
            PlaceholderSyntax::Brace => format!(r"\{{\s*({})\s*\}}", name),
            PlaceholderSyntax::DoubleUnderscore => format!("__({})__", name),
            PlaceholderSyntax::EscapedBracket => format!(r"\\\[({})\\\]", name),
        }
    }

    fn scan_class(self) -> &'static str {
        match self {
            PlaceholderSyntax::DoubleUnderscore => UPPER_NAME_CLASS,
            _ => NAME_CLASS,
        }
    }
}

impl fmt::Display for PlaceholderSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderSyntax::Brace => write!(f, "brace"),
            PlaceholderSyntax::DoubleUnderscore => write!(f, "underscore"),
            PlaceholderSyntax::EscapedBracket => write!(f, "bracket"),
        }
    }
}

/// Scanning matchers paired with the syntax they detect.
pub(super) static SCANNERS: LazyLock<Vec<(Regex, PlaceholderSyntax)>> = LazyLock::new(|| {
    PlaceholderSyntax::ALL
        .iter()
        .map(|&syntax| {
            let regex = Regex::new(&syntax.pattern(syntax.scan_class()))
                .expect("Invalid placeholder scan regex");
            (regex, syntax)
        })
        .collect()
});

/// Build matchers for one exact variable name in every syntax.
pub(super) fn matchers_for(name: &str) -> Vec<Regex> {
    let escaped = regex::escape(name);
    PlaceholderSyntax::ALL
        .iter()
        // Escaped literals only fail to compile past the regex size limit.
        .filter_map(|syntax| Regex::new(&syntax.pattern(&escaped)).ok())
        .collect()
}
