//! Implementation of the `promptlib init` command.
//!
//! Creates the library directory:
//!
//! ```text
//! .promptlib/
//! ├── config.yaml      default configuration
//! ├── library.json     empty collection
//! └── events/          audit log
//! ```

use crate::config::Config;
use crate::context::LibraryContext;
use crate::error::{PromptError, Result};
use crate::events::{Event, EventAction, record_event};
use crate::fs::atomic_write_file;
use serde_json::json;
use std::fs;

/// Execute the `promptlib init` command.
///
/// Fails if a library is already reachable from the current directory.
pub fn cmd_init() -> Result<()> {
    let ctx = LibraryContext::resolve()?;

    if ctx.exists() {
        return Err(PromptError::UserError(format!(
            "prompt library already initialized at {}",
            ctx.library_dir.display()
        )));
    }

    let config = Config::default();
    create_library(&ctx, &config)?;

    let event = Event::new(EventAction::Init).with_details(json!({
        "library_dir": ctx.library_dir.display().to_string(),
        "library_file": config.library_file,
    }));
    record_event(&ctx, &config, &event)?;

    println!("Initialized prompt library.");
    println!();
    println!("Library directory: {}", ctx.library_dir.display());
    println!();
    println!("Created:");
    println!("  config.yaml");
    println!("  {}", config.library_file);
    println!("  events/");
    println!();
    println!("Create your first template with `promptlib forge <FILE>`.");

    Ok(())
}

fn create_library(ctx: &LibraryContext, config: &Config) -> Result<()> {
    for dir in [&ctx.library_dir, &ctx.events_dir()] {
        fs::create_dir_all(dir).map_err(|e| {
            PromptError::UserError(format!(
                "failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    atomic_write_file(ctx.config_path(), &config.to_yaml()?)?;
    atomic_write_file(ctx.library_path(config), "[]\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LIBRARY_DIR_ENV;
    use crate::store::{JsonFileStore, RecordStore};
    use crate::test_support::EnvGuard;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_init_creates_library() {
        let temp = TempDir::new().unwrap();
        let library_dir = temp.path().join(".promptlib");
        let _env = EnvGuard::set(LIBRARY_DIR_ENV, &library_dir);

        cmd_init().unwrap();

        assert!(library_dir.join("config.yaml").is_file());
        assert!(library_dir.join("events").is_dir());
        let store = JsonFileStore::new(library_dir.join("library.json"));
        assert!(store.list_all().unwrap().is_empty());

        let config = Config::load(library_dir.join("config.yaml")).unwrap();
        assert_eq!(config.id_prefix, "prompt");

        let log = fs::read_to_string(library_dir.join("events/events.ndjson")).unwrap();
        assert!(log.contains("\"action\":\"init\""));
    }

    #[test]
    #[serial]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        let library_dir = temp.path().join(".promptlib");
        let _env = EnvGuard::set(LIBRARY_DIR_ENV, &library_dir);

        cmd_init().unwrap();
        let err = cmd_init().unwrap_err();
        assert!(err.to_string().contains("already initialized"));
    }
}
