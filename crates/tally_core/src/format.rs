//! Money formatting shared by the view and the screens

use rust_decimal::{Decimal, RoundingStrategy};

/// Default currency symbol
pub const DEFAULT_CURRENCY_SYMBOL: &str = "¥";

/// Round to cents, half away from zero, and drop the sign of a zero result
fn cents(value: Decimal) -> Decimal {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}

/// Two decimals, no symbol: `5000.00`, `-50.00`
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", cents(value))
}

/// Symbol then amount: `¥5000.00`, `¥-50.00`
pub fn format_money(symbol: &str, value: Decimal) -> String {
    format!("{symbol}{}", format_amount(value))
}

/// Amount with an explicit `+` for non-negative values: `+0.00`, `-50.00`
pub fn format_signed(value: Decimal) -> String {
    let value = cents(value);
    if value >= Decimal::ZERO {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}
