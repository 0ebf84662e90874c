use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{Store, StorageError};

/// Store backed by a single JSON object file.
///
/// Each key is a top-level field of the file. The file is created on the first
/// write; a missing file reads as empty. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => return Err(StorageError::Io { path: self.path.clone(), source }),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            _ => {
                log::warn!("{} does not hold a JSON object; starting empty", self.path.display());
                Ok(Map::new())
            }
        }
    }

    /// Current contents for a rewrite. Corrupt JSON is discarded; I/O
    /// failures propagate.
    fn load_for_write(&self) -> Result<Map<String, Value>, StorageError> {
        match self.load() {
            Err(StorageError::Json(e)) => {
                log::warn!("discarding unreadable store {}: {e}", self.path.display());
                Ok(Map::new())
            }
            other => other,
        }
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        let mut map = self.load_for_write()?;
        map.insert(key.to_string(), value);

        let text = serde_json::to_string_pretty(&Value::Object(map))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|source| StorageError::Io { path: parent.to_path_buf(), source })?;
        }
        fs::write(&self.path, text)
            .map_err(|source| StorageError::Io { path: self.path.clone(), source })?;
        log::trace!("wrote '{key}' to {}", self.path.display());
        Ok(())
    }
}
