//! Native storage implementation using the filesystem.
//!
//! Directory structure:
//! ~/.tally/
//!   myTrackerData.json   # The ledger blob
//!   config.yaml          # Preferences (optional)
//!   tally.log            # Log file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tally_core::{LEDGER_KEY, LedgerStore};

use crate::config::AppConfig;
use crate::platform::storage::{Storage, StorageError};

const CONFIG_FILE_NAME: &str = "config.yaml";

pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    /// Create a new native storage with the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ledger_path(&self) -> PathBuf {
        self.root.join(format!("{LEDGER_KEY}.json"))
    }

    fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }
}

/// Read a file, treating a missing file as `None`.
fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StorageError::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

impl Storage for NativeStorage {
    fn load(&self) -> Result<LedgerStore, StorageError> {
        match read_optional(&self.ledger_path())? {
            Some(json) if !json.trim().is_empty() => LedgerStore::from_json(&json)
                .map_err(|e| StorageError::Parse(format!("Failed to parse ledger: {}", e))),
            _ => Ok(LedgerStore::default()),
        }
    }

    fn save(&self, store: &LedgerStore) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;

        let json = store
            .to_json()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize ledger: {}", e)))?;

        // Write next to the target and rename over it so a crash mid-write
        // never leaves a truncated ledger behind.
        let path = self.ledger_path();
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json)
            .map_err(|e| StorageError::Io(format!("Failed to write ledger: {}", e)))?;
        fs::rename(&tmp_path, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace ledger: {}", e)))
    }

    fn load_config(&self) -> Result<AppConfig, StorageError> {
        match read_optional(&self.config_path())? {
            Some(yaml) if !yaml.trim().is_empty() => AppConfig::from_yaml(&yaml)
                .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e))),
            _ => Ok(AppConfig::default()),
        }
    }

    fn location(&self) -> String {
        self.ledger_path().display().to_string()
    }
}
