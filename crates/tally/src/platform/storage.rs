//! Storage abstraction for platform-independent persistence.

use tally_core::{LedgerError, LedgerStore};

use crate::config::AppConfig;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (permission denied, disk full, etc.)
    Io(String),
    /// Stored data could not be decoded
    Parse(String),
    /// Serialization error
    Serialize(String),
    /// Storage not available (e.g., LocalStorage disabled)
    NotAvailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotAvailable(msg) => write!(f, "Storage not available: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<LedgerError> for StorageError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Codec(_) | LedgerError::DuplicateId(_) => {
                StorageError::Parse(err.to_string())
            }
            other => StorageError::Serialize(other.to_string()),
        }
    }
}

/// Platform-independent persistence for the ledger.
///
/// The whole store is one blob under a fixed key: `load` reads it once at
/// startup and `save` overwrites it after every change.
pub trait Storage {
    /// Load the ledger; an absent blob is an empty ledger
    fn load(&self) -> Result<LedgerStore, StorageError>;

    /// Overwrite the stored ledger with `store`
    fn save(&self, store: &LedgerStore) -> Result<(), StorageError>;

    /// Load user preferences; absent preferences are the defaults
    fn load_config(&self) -> Result<AppConfig, StorageError>;

    /// Human-readable location of the ledger, for logs
    fn location(&self) -> String;
}
