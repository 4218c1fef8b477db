use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::InvestmentId;

/// An investment the user tracks by hand.
///
/// `principal` only grows through top-ups. `current_return` is the latest
/// absolute gain or loss the user reported and is replaced on each update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentPosition {
    pub id: InvestmentId,
    pub name: String,
    pub principal: Decimal,
    pub current_return: Decimal,
    pub last_update: Date,
}
