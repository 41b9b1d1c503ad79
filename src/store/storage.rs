use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Error type for key-value storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Minimal key-value store contract.
///
/// One key holds one string value; reading a missing key yields `None`.
/// `keys` and `multi_get` exist for the `dump` diagnostics command.
pub trait KeyValue: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;

    fn multi_get(&self, keys: &[String]) -> Result<Vec<(String, Option<String>)>, StorageError> {
        keys.iter()
            .map(|k| Ok((k.clone(), self.get(k)?)))
            .collect()
    }
}

const VALUE_EXT: &str = "kv";

/// Directory-backed store: one `<key>.kv` file per key.
///
/// Writes go through a temp file in the same directory and a rename, so a
/// crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir)?;
        Ok(FileStorage {
            dir: dir.to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", key, VALUE_EXT))
    }

    fn write_atomic(&self, path: &Path, value: &str) -> std::io::Result<()> {
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValue for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        match self.write_atomic(&path, value) {
            Ok(()) => Ok(()),
            Err(e) => Err(StorageError::Write { path, source: e }),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write { path, source: e }),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        for key in self.keys()? {
            self.remove(&key)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(VALUE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                keys.push(stem.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn get_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        assert_eq!(storage.get("TASKS").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("TASKS", "[{\"id\":\"1\"}]").unwrap();
        assert_eq!(storage.get("TASKS").unwrap().unwrap(), "[{\"id\":\"1\"}]");
    }

    #[test]
    fn set_replaces_whole_value() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("TASKS", "first").unwrap();
        storage.set("TASKS", "second").unwrap();
        assert_eq!(storage.get("TASKS").unwrap().unwrap(), "second");
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.remove("TASKS").unwrap();
    }

    #[test]
    fn keys_lists_only_store_files() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("TASKS", "x").unwrap();
        storage.set("OTHER", "y").unwrap();
        fs::write(dir.path().join("config.toml"), "locale = \"en\"").unwrap();
        assert_eq!(storage.keys().unwrap(), vec!["OTHER", "TASKS"]);
    }

    #[test]
    fn multi_get_reports_missing_keys() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("TASKS", "x").unwrap();
        let items = storage
            .multi_get(&["TASKS".into(), "NOPE".into()])
            .unwrap();
        assert_eq!(
            items,
            vec![
                ("TASKS".to_string(), Some("x".to_string())),
                ("NOPE".to_string(), None),
            ]
        );
    }

    #[test]
    fn clear_removes_all_keys_but_not_other_files() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();
        storage.set("TASKS", "x").unwrap();
        storage.set("OTHER", "y").unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        storage.clear().unwrap();
        assert!(storage.keys().unwrap().is_empty());
        assert!(dir.path().join("config.toml").exists());
    }
}
