//! Placeholder engine for prompt templates.
//!
//! This module provides:
//!
//! - **Syntax**: the placeholder forms recognized in raw text
//! - **Extract**: ordered, de-duplicated variable detection
//! - **Canonical**: rewriting every known variable to the `{name}` form
//! - **Assemble**: substituting values back into a canonical template
//!
//! # Placeholder Syntax
//!
//! Raw text may mark variables in three ways:
//!
//! ```text
//! Write a {tone} email to __RECIPIENT__ about \[topic\].
//! ```
//!
//! Stored templates only use the brace form (`{name}`); see [`canonicalize`].
//! All functions here are pure and operate on borrowed strings.

mod assemble;
mod canonical;
mod extract;
mod syntax;
mod variable;


pub use assemble::assemble;
pub use canonical::{canonicalize, missing_placeholders};
pub use extract::{PlaceholderMatch, extract, next_manual_name, sanitize_name, scan};
pub use syntax::PlaceholderSyntax;
pub use variable::VariableDescriptor;
