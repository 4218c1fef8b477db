//! Unique identifiers for ledger records
//!
//! Identifiers are millisecond timestamps taken at creation time, bumped past
//! the highest identifier already in the store when the clock has not moved.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for an IncomeEntry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IncomeId(pub u64);

/// Unique identifier for an InvestmentPosition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InvestmentId(pub u64);

impl fmt::Display for IncomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for InvestmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for InvestmentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(InvestmentId)
    }
}
