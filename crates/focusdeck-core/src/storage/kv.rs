//! JSON key/value persistence.
//!
//! The store is a single JSON file holding a string-to-value map. Reads
//! are fail-soft: a missing or malformed file behaves as an empty map.
//! Writes rewrite the whole file through a temp file and rename, so a
//! crashed write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use super::data_dir;
use crate::error::{Result, StorageError};

/// File name of the backing store inside the data directory.
pub const STORE_FILE: &str = "store.json";

/// File-backed key/value store for JSON-serializable values.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open the store in the application data directory.
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?.join(STORE_FILE)))
    }

    /// Open a store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Value stored under `key`, or `None` when absent or unreadable.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.read_map().remove(key)
    }

    /// Store `value` under `key`, creating the file if needed.
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_map();
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }

    fn read_map(&self) -> BTreeMap<String, Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    fn write_map(&self, map: &BTreeMap<String, Value>) -> Result<()> {
        let text = serde_json::to_string_pretty(map)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(|source| StorageError::WriteFailed {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JsonStore {
        JsonStore::at(dir.path().join("store.json"))
    }

    #[test]
    fn get_of_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).get("nothing").is_none());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("answer", json!({"value": 42})).unwrap();
        assert_eq!(store.get("answer"), Some(json!({"value": 42})));
    }

    #[test]
    fn set_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("a", json!(1)).unwrap();
        store.set("b", json!([1, 2, 3])).unwrap();
        assert_eq!(store.get("a"), Some(json!(1)));
        assert_eq!(store.get("b"), Some(json!([1, 2, 3])));
    }

    #[test]
    fn set_overwrites_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.set("k", json!("old")).unwrap();
        store.set("k", json!("new")).unwrap();
        assert_eq!(store.get("k"), Some(json!("new")));
    }

    #[test]
    fn malformed_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{{{{").unwrap();

        let store = JsonStore::at(&path);
        assert!(store.get("k").is_none());

        // A write through the store repairs the file.
        store.set("k", json!(true)).unwrap();
        assert_eq!(store.get("k"), Some(json!(true)));
    }

    #[test]
    fn no_tmp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set("k", json!(1)).unwrap();
        assert!(!dir.path().join("store.json.tmp").exists());
    }
}
