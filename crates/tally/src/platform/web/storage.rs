//! Web storage implementation using browser LocalStorage.

use gloo_storage::{LocalStorage, Storage as GlooStorage};

use tally_core::{LEDGER_KEY, LedgerStore};

use crate::config::AppConfig;
use crate::platform::storage::{Storage, StorageError};

/// Key for the user's preferences
const CONFIG_KEY: &str = "tally_config";

/// Web storage implementation using browser LocalStorage.
///
/// The ledger is stored as a raw JSON string under [`LEDGER_KEY`], the same
/// layout older browser builds of the tracker wrote, so existing data loads
/// unchanged.
#[derive(Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn read_raw(key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::NotAvailable(format!("{:?}", e)))
    }
}

impl Storage for WebStorage {
    fn load(&self) -> Result<LedgerStore, StorageError> {
        match Self::read_raw(LEDGER_KEY)? {
            Some(json) if !json.trim().is_empty() => LedgerStore::from_json(&json)
                .map_err(|e| StorageError::Parse(format!("Failed to parse ledger: {}", e))),
            _ => Ok(LedgerStore::default()),
        }
    }

    fn save(&self, store: &LedgerStore) -> Result<(), StorageError> {
        let json = store
            .to_json()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize ledger: {}", e)))?;
        LocalStorage::raw()
            .set_item(LEDGER_KEY, &json)
            .map_err(|e| StorageError::Io(format!("Failed to save ledger: {:?}", e)))
    }

    fn load_config(&self) -> Result<AppConfig, StorageError> {
        match LocalStorage::get::<AppConfig>(CONFIG_KEY) {
            Ok(config) => Ok(config),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(AppConfig::default()),
            Err(e) => Err(StorageError::Parse(format!("Failed to parse config: {}", e))),
        }
    }

    fn location(&self) -> String {
        format!("localStorage[{LEDGER_KEY}]")
    }
}
