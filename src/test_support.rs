use crate::context::LibraryContext;
use crate::placeholder::VariableDescriptor;
use crate::template::TemplateRecord;
use std::ffi::{OsStr, OsString};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Sets an environment variable for the lifetime of the guard.
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<OsString>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        // The process environment is global; lock it so tests don't race even
        // if a #[serial] annotation is missed.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::var_os(key);
        // SAFETY: guarded by ENV_LOCK and #[serial] on every caller.
        unsafe { std::env::set_var(key, value) };
        Self {
            key,
            original,
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held here.
        unsafe {
            match &self.original {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

/// Create an empty initialized library in a fresh temp dir.
pub(crate) fn create_test_library() -> (TempDir, LibraryContext) {
    let temp_dir = TempDir::new().unwrap();
    let ctx = LibraryContext::resolve_from(temp_dir.path()).unwrap();
    std::fs::create_dir_all(&ctx.library_dir).unwrap();
    (temp_dir, ctx)
}

/// A record with one variable, for store and search tests.
pub(crate) fn sample_record(id: &str, title: &str) -> TemplateRecord {
    let mut record = TemplateRecord::new(
        "prompt",
        title,
        "Write about {topic}.",
        vec![VariableDescriptor::new("topic").with_default("cats")],
    );
    record.id = id.to_string();
    record
}
