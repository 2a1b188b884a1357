//! Configuration model for promptlib.
//!
//! This module defines the Config struct that represents `.promptlib/config.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::Config;
