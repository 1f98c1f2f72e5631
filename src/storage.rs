//! Durable key/value storage for UI preferences.
//!
//! The store only needs two calls from its backing storage: read a string
//! by key and write one back. Writes are fire-and-forget; a backend that
//! fails to persist logs the failure and carries on.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use directories::ProjectDirs;

/// Client-local persistent key/value storage.
pub trait ThemeStorage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// Must not panic. Failures are the backend's to report.
    fn set(&self, key: &str, value: &str);
}

/// In-process storage.
///
/// Clones share the same map, which lets several stores (or a test) observe
/// one "session".
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.set(key, value);
        storage
    }

    /// Returns the current value for `key`.
    pub fn value(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Storage backed by a JSON object file.
///
/// The file holds a flat `{"key": "value"}` map. Every write rewrites the
/// whole file; it is expected to stay tiny.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the per-user data directory, e.g.
    /// `~/.local/share/etf-mts-view/preferences.json` on Linux.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn default_location() -> Option<Self> {
        ProjectDirs::from("kr", "etf-mts", "etf-mts-view")
            .map(|dirs| Self::new(dirs.data_dir().join("preferences.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "storage unreadable");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "storage file is not a string map");
                BTreeMap::new()
            }
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)
    }
}

impl ThemeStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.write(&entries) {
            tracing::warn!(path = %self.path.display(), key, error = %e, "failed to persist preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_get_set() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.get("k"), None);

        storage.set("k", "v");
        assert_eq!(storage.get("k").as_deref(), Some("v"));

        storage.set("k", "w");
        assert_eq!(storage.value("k").as_deref(), Some("w"));
    }

    #[test]
    fn test_memory_storage_clones_share_entries() {
        let storage = MemoryStorage::with_entry("k", "v");
        let other = storage.clone();
        other.set("k", "changed");
        assert_eq!(storage.get("k").as_deref(), Some("changed"));
    }

    #[test]
    fn test_file_storage_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.json"));
        assert_eq!(storage.get("anything"), None);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        FileStorage::new(&path).set("etf-mts-theme", "light");
        FileStorage::new(&path).set("other", "x");

        let reopened = FileStorage::new(&path);
        assert_eq!(reopened.get("etf-mts-theme").as_deref(), Some("light"));
        assert_eq!(reopened.get("other").as_deref(), Some("x"));
    }

    #[test]
    fn test_file_storage_corrupt_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("etf-mts-theme"), None);

        storage.set("etf-mts-theme", "dark");
        assert_eq!(storage.get("etf-mts-theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_storage_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();

        let storage = FileStorage::new(&path);
        storage.set("etf-mts-theme", "light");
        assert_eq!(storage.get("etf-mts-theme"), None);
    }
}
