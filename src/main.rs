//! Promptlib: a file-based library of reusable prompt templates.
//!
//! This is the main entry point for the `promptlib` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod clipboard;
pub mod config;
pub mod context;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod forge;
pub mod fs;
pub mod placeholder;
pub mod search;
pub mod store;
pub mod template;
pub mod view;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
