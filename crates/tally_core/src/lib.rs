//! Personal ledger library
//!
//! This crate holds everything about the ledger that does not depend on a
//! terminal or a browser:
//! - Income entries and investment positions ([`model`])
//! - The [`LedgerStore`] and its three mutating operations
//! - Validation of raw form values into typed amounts and dates ([`parse`])
//! - The JSON blob the store is persisted as
//! - A pure view function turning the store plus a month filter into
//!   displayable rows and totals ([`view`])
//!
//! ```ignore
//! use tally_core::{IncomeDraft, LedgerStore, MonthFilter, ViewOptions, view};
//!
//! let mut store = LedgerStore::default();
//! store.add_income(&IncomeDraft::new("2024-03-01", "Salary", "5000"))?;
//!
//! let month = MonthFilter::parse("2024-03")?;
//! let rendered = view::render(&store, &month, &ViewOptions::default());
//! assert_eq!(rendered.income.month_total_text, "¥5000.00");
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod format;
pub mod month;
pub mod parse;
pub mod store;
pub mod view;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{Field, LedgerError, Result};
pub use model::{
    DEFAULT_INCOME_DESCRIPTION, IncomeDraft, IncomeEntry, IncomeId, InvestmentDraft, InvestmentId,
    InvestmentPosition, ReturnDraft, TargetChoice,
};
pub use month::{MonthFilter, YearMonth};
pub use store::{LEDGER_KEY, LedgerStore};
pub use view::{LedgerView, Tone, ViewOptions};
