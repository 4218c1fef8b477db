//! Platform abstraction layer for native/web compatibility.
//!
//! [`Storage`] persists the ledger blob and reads the user's preferences.
//! Native builds keep both in the data directory; web builds keep them in the
//! browser's LocalStorage.

mod storage;

#[cfg(test)]
pub mod memory;

#[cfg(feature = "native")]
pub mod native;

#[cfg(all(feature = "web", not(feature = "native")))]
pub mod web;

pub use storage::{Storage, StorageError};

#[cfg(feature = "native")]
pub use native::NativeStorage;

#[cfg(all(feature = "web", not(feature = "native")))]
pub use web::WebStorage;
