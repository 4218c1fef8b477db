//! Validation of raw form values

use std::str::FromStr;

use jiff::civil::Date;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Field, LedgerError, Result};

/// Largest amount accepted in either direction, 9999999999999.99.
///
/// Amounts are stored in cents with at most 15 significant digits, which the
/// blob's float encoding reproduces exactly.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Parse a required `YYYY-MM-DD` date
pub fn required_date(field: Field, raw: &str) -> Result<Date> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField(field));
    }
    trimmed.parse::<Date>().map_err(|_| LedgerError::InvalidDate {
        field,
        value: trimmed.to_string(),
    })
}

/// Parse a required amount rounded to cents; any sign is accepted
pub fn required_amount(field: Field, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField(field));
    }
    let cleaned = trimmed.replace(',', "");
    let amount = Decimal::from_str(&cleaned)
        .map_err(|_| LedgerError::InvalidAmount {
            field,
            value: trimmed.to_string(),
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if amount.abs() > MAX_AMOUNT {
        return Err(LedgerError::AmountOutOfRange {
            field,
            value: trimmed.to_string(),
        });
    }
    Ok(amount)
}

/// Parse a required amount that must be strictly greater than zero
pub fn positive_amount(field: Field, raw: &str) -> Result<Decimal> {
    let amount = required_amount(field, raw)?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount {
            field,
            value: raw.trim().to_string(),
        });
    }
    Ok(amount)
}

/// Trimmed text, or an error when nothing is left
pub fn required_text(field: Field, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingField(field));
    }
    Ok(trimmed.to_string())
}
