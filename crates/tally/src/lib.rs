//! Terminal (and browser) front end for the personal ledger.
//!
//! The ledger itself lives in `tally_core`; this crate owns the application
//! shell around it:
//! - Tab navigation between the overview, income, and investment screens
//! - Form modals for recording income, investments, and returns
//! - Persisting the store after every change (file on native, LocalStorage on web)
//! - Logging and configuration

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod event;
pub mod modals;
pub mod platform;
pub mod screens;
pub mod state;
pub mod util;

#[cfg(feature = "native")]
mod logging;

#[cfg(all(feature = "web", not(feature = "native")))]
mod web;

#[cfg(test)]
mod tests;

pub use app::App;
pub use config::AppConfig;

#[cfg(feature = "native")]
pub use logging::init_logging;

/// Initialize logging to the browser console.
#[cfg(all(feature = "web", not(feature = "native")))]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
