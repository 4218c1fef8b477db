//! In-memory storage used by tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tally_core::LedgerStore;

use crate::config::AppConfig;
use crate::platform::{Storage, StorageError};

/// Keeps the serialized blob in memory. Clones share the same slot, so a
/// test can hand one clone to the app and inspect the other.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    blob: Rc<RefCell<Option<String>>>,
    saves: Rc<Cell<usize>>,
    fail_saves: Rc<Cell<bool>>,
    config: AppConfig,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(json: &str) -> Self {
        let storage = Self::default();
        *storage.blob.borrow_mut() = Some(json.to_string());
        storage
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make every following save fail
    pub fn fail_saves(&self) {
        self.fail_saves.set(true);
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<LedgerStore, StorageError> {
        match self.blob.borrow().as_deref() {
            Some(json) => Ok(LedgerStore::from_json(json)?),
            None => Ok(LedgerStore::default()),
        }
    }

    fn save(&self, store: &LedgerStore) -> Result<(), StorageError> {
        if self.fail_saves.get() {
            return Err(StorageError::Io("disk full".to_string()));
        }
        *self.blob.borrow_mut() = Some(store.to_json()?);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn load_config(&self) -> Result<AppConfig, StorageError> {
        Ok(self.config.clone())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
