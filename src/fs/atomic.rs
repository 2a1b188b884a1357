//! Atomic file writes.
//!
//! Every write follows the same pattern:
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Sync the temporary file to disk
//! 3. Rename it over the target
//!
//! `std::fs::rename` replaces an existing target on both POSIX and Windows,
//! so readers see either the old collection or the new one, never a mix.
//! After a crash a stale `.{filename}.tmp` may remain; it is overwritten by
//! the next write.

use crate::error::{PromptError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptError::UserError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PromptError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    sync_parent_dir(path);
    Ok(())
}

/// Persist the directory entry after a rename.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PromptError::UserError(format!("invalid file path '{}'", target.display()))
        })?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PromptError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            PromptError::UserError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("library.json");

        atomic_write_file(&file_path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_atomic_write_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("library.json");
        fs::write(&file_path, "[{\"old\": true}]").unwrap();

        atomic_write_file(&file_path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "[]");
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a").join("b").join("export.json");

        atomic_write(&file_path, b"nested").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "nested");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("library.json");

        atomic_write_file(&file_path, "[]").unwrap();

        assert!(!temp_dir.path().join(".library.json.tmp").exists());
    }

    #[test]
    fn test_temp_path_is_hidden_sibling() {
        let temp = temp_path_for(Path::new("/lib/.promptlib/library.json")).unwrap();
        assert_eq!(temp, Path::new("/lib/.promptlib/.library.json.tmp"));
    }

    #[test]
    fn test_atomic_write_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        atomic_write(&file_path, b"").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }
}
