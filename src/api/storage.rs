use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{TimelineError, TimelineResult};

/// Key-value persistence port the event store writes full snapshots through.
///
/// Implementations only move opaque strings; snapshot encoding belongs to
/// the store.
pub trait EventStorage {
    fn read(&self, key: &str) -> TimelineResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> TimelineResult<()>;
    fn remove(&mut self, key: &str) -> TimelineResult<()>;
}

impl<S: EventStorage + ?Sized> EventStorage for Box<S> {
    fn read(&self, key: &str) -> TimelineResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> TimelineResult<()> {
        (**self).write(key, value)
    }

    fn remove(&mut self, key: &str) -> TimelineResult<()> {
        (**self).remove(key)
    }
}

/// In-process storage used by tests and headless hosts.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: u64,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Number of successful writes, for asserting one write per mutation.
    #[must_use]
    pub fn write_count(&self) -> u64 {
        self.writes
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl EventStorage for MemoryStorage {
    fn read(&self, key: &str) -> TimelineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> TimelineResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.writes = self.writes.saturating_add(1);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TimelineResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed storage: each key lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses `dir`, creating it when missing.
    pub fn open(dir: impl Into<PathBuf>) -> TimelineResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            TimelineError::Storage(format!("failed to create `{}`: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys must be plain file stems so every path stays inside `dir`.
    fn path_for(&self, key: &str) -> TimelineResult<PathBuf> {
        if key.trim().is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(TimelineError::Storage(format!(
                "storage key `{key}` must be a plain name"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl EventStorage for FileStorage {
    fn read(&self, key: &str) -> TimelineResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TimelineError::Storage(format!(
                "failed to read `{}`: {err}",
                path.display()
            ))),
        }
    }

    /// Replaces the value atomically via a sibling temp file and rename.
    fn write(&mut self, key: &str, value: &str) -> TimelineResult<()> {
        let path = self.path_for(key)?;
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value).map_err(|e| {
            TimelineError::Storage(format!("failed to write `{}`: {e}", staging.display()))
        })?;
        fs::rename(&staging, &path).map_err(|e| {
            TimelineError::Storage(format!("failed to replace `{}`: {e}", path.display()))
        })?;
        trace!(path = %path.display(), bytes = value.len(), "snapshot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> TimelineResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(TimelineError::Storage(format!(
                "failed to remove `{}`: {err}",
                path.display()
            ))),
        }
    }
}
