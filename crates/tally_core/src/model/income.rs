use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::IncomeId;

/// A single recorded income. Never edited once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeEntry {
    pub id: IncomeId,
    pub date: Date,
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: Decimal,
}
