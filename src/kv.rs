//! Key-value persistence for the promptstore application.
//!
//! The prompt store persists its collection through a synchronous string
//! key-value store. The production implementation keeps all keys in a single
//! JSON file and writes it atomically; an in-memory implementation backs
//! tests and ephemeral runs.

use std::{
    cell::RefCell,
    collections::HashMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, error, trace};
use tempfile::NamedTempFile;

use crate::{PromptError, Result};

/// Fixed key under which the prompt collection snapshot is stored.
pub const STORAGE_KEY: &str = "prompts_storage";

/// A synchronous string key-value store.
///
/// Reads and writes are whole-value: every `set` replaces the previous value
/// for the key. Writes may fail (the backing medium is capacity-limited);
/// callers decide how to degrade.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Returns whether a value exists under `key`.
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// File-backed key-value store holding all keys in one JSON object file.
pub struct FileKeyValueStore {
    /// Path of the JSON file holding the key-value map
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store backed by `storage.json` inside `data_dir`.
    ///
    /// The directory is created if it does not exist; the file itself is
    /// created lazily on the first write.
    pub fn open(data_dir: &Path) -> Result<Self> {
        if !data_dir.exists() {
            debug!(
                "Data directory does not exist, creating: {}",
                data_dir.display()
            );
            fs::create_dir_all(data_dir).map_err(|e| {
                error!("Failed to create data directory: {}", e);
                PromptError::Io(e)
            })?;
        }

        Ok(Self {
            path: data_dir.join("storage.json"),
        })
    }

    fn read_map(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            trace!("Storage file absent, reading as empty map");
            return Ok(HashMap::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            error!("Failed to read storage file {}: {}", self.path.display(), e);
            PromptError::Io(e)
        })?;

        serde_json::from_str(&raw).map_err(|e| {
            error!(
                "Failed to parse storage file {}: {}",
                self.path.display(),
                e
            );
            PromptError::Serialization(e)
        })
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(map)?;

        // Write to a temporary file in the same directory, then atomically
        // move it over the target so a failed write never truncates the file.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            PromptError::Io(e)
        })?;

        temp_file.write_all(json.as_bytes()).map_err(|e| {
            error!("Failed to write to temporary file: {}", e);
            PromptError::Io(e)
        })?;

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            PromptError::Io(e)
        })?;

        temp_file.persist(&self.path).map_err(|e| {
            error!("Failed to persist file {}: {}", self.path.display(), e.error);
            PromptError::Io(e.error)
        })?;

        trace!("Storage file written: {}", self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

/// In-memory key-value store with no persistence across processes.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
    /// When set, every write fails with a storage error
    fail_writes: RefCell<bool>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent writes fail, simulating a full or broken medium.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if *self.fail_writes.borrow() {
            return Err(PromptError::StorageFailed {
                message: format!("write rejected for key {}", key),
            });
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
