//! Behavioural tests for the ledger store and view
//!
//! Tests are organized by topic:
//! - `income` - Adding income entries and input validation
//! - `investments` - Opening, topping up, and reporting returns on positions
//! - `persistence` - The JSON blob the store is saved as
//! - `view` - Month filtering, totals, selectors, and end-to-end scenarios
