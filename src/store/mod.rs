pub mod storage;
pub mod task_store;
pub mod writer;

pub use storage::{FileStorage, KeyValue, StorageError};
pub use task_store::{TaskStore, TASKS_KEY};
pub use writer::StoreWriter;

use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Resolve the data directory: `--dir` flag, then `JOT_DIR`, then `~/.jot`.
pub fn data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = std::env::var_os("JOT_DIR") {
        return PathBuf::from(dir);
    }
    match std::env::var_os("HOME") {
        Some(home) => Path::new(&home).join(".jot"),
        None => PathBuf::from(".jot"),
    }
}

/// Read `config.toml` from the data directory, falling back to defaults.
/// A malformed file is logged and ignored, never fatal.
pub fn load_config(dir: &Path) -> AppConfig {
    let path = dir.join("config.toml");
    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(_) => return AppConfig::default(),
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}
