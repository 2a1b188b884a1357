//! Library context resolution for promptlib.
//!
//! Finds the `.promptlib/` directory that holds the library for the current
//! working directory, the way Git finds `.git/`: the working directory and
//! each of its ancestors are checked in turn. The `PROMPTLIB_DIR`
//! environment variable short-circuits the search and names the library
//! directory directly.

use crate::config::Config;
use crate::error::{PromptError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the library directory.
pub const LIBRARY_DIR_NAME: &str = ".promptlib";

/// Environment variable overriding library discovery.
pub const LIBRARY_DIR_ENV: &str = "PROMPTLIB_DIR";

/// Resolved paths for a prompt library. All paths are absolute.
#[derive(Debug, Clone)]
pub struct LibraryContext {
    /// The `.promptlib/` directory (which may not exist yet).
    pub library_dir: PathBuf,
}

impl LibraryContext {
    /// Resolve the library from the environment and current working directory.
    pub fn resolve() -> Result<Self> {
        if let Some(dir) = env::var_os(LIBRARY_DIR_ENV).filter(|d| !d.is_empty()) {
            let dir = PathBuf::from(dir);
            let library_dir = if dir.is_absolute() {
                dir
            } else {
                current_dir()?.join(dir)
            };
            return Ok(Self { library_dir });
        }

        Self::resolve_from(current_dir()?)
    }

    /// Resolve the library by searching upward from `cwd`.
    ///
    /// When no ancestor holds a library, the context points at
    /// `{cwd}/.promptlib` so `init` can create it there.
    pub fn resolve_from<P: AsRef<Path>>(cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();

        let found = cwd
            .ancestors()
            .map(|dir| dir.join(LIBRARY_DIR_NAME))
            .find(|candidate| candidate.is_dir());

        Ok(Self {
            library_dir: found.unwrap_or_else(|| cwd.join(LIBRARY_DIR_NAME)),
        })
    }

    /// Check whether the library directory exists.
    pub fn exists(&self) -> bool {
        self.library_dir.is_dir()
    }

    /// Ensure the library is initialized, returning an error if not.
    pub fn ensure_initialized(&self) -> Result<()> {
        if !self.exists() {
            return Err(PromptError::UserError(format!(
                "prompt library not initialized.\n\
                 Expected library directory at: {}\n\n\
                 Run `promptlib init` to create one here, or set {} to an existing library.",
                self.library_dir.display(),
                LIBRARY_DIR_ENV
            )));
        }
        Ok(())
    }

    /// Path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.library_dir.join("config.yaml")
    }

    /// Load the library config (defaults when the file is absent).
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config_path())
    }

    /// Path to the serialized collection for `config`.
    pub fn library_path(&self, config: &Config) -> PathBuf {
        self.library_dir.join(&config.library_file)
    }

    /// Path to the events directory.
    pub fn events_dir(&self) -> PathBuf {
        self.library_dir.join("events")
    }

    /// Path to the audit log.
    pub fn events_file(&self) -> PathBuf {
        self.events_dir().join("events.ndjson")
    }
}

fn current_dir() -> Result<PathBuf> {
    env::current_dir().map_err(|e| {
        PromptError::UserError(format!("failed to get current working directory: {}", e))
    })
}

/// Resolve the context and ensure the library exists.
///
/// Use this in every command except `init`.
pub fn require_initialized_library() -> Result<LibraryContext> {
    let ctx = LibraryContext::resolve()?;
    ctx.ensure_initialized()?;
    Ok(ctx)
}
