use std::fmt;

use crate::model::InvestmentId;

/// Form fields an operation can reject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Description,
    Amount,
    Name,
    Target,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Date => "date",
            Field::Description => "description",
            Field::Amount => "amount",
            Field::Name => "name",
            Field::Target => "investment",
        };
        f.write_str(label)
    }
}

/// Errors raised by ledger operations and the blob codec.
///
/// Every variant is raised before the store is touched, so a failed operation
/// never leaves a partial change behind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("please fill in the {0}")]
    MissingField(Field),

    #[error("{field} '{value}' is not a valid date (expected YYYY-MM-DD)")]
    InvalidDate { field: Field, value: String },

    #[error("{field} '{value}' is not a valid amount")]
    InvalidAmount { field: Field, value: String },

    #[error("{field} '{value}' is out of range (at most {limit} either way)", limit = crate::parse::MAX_AMOUNT)]
    AmountOutOfRange { field: Field, value: String },

    #[error("topping up investment {0} would take its principal past {limit}", limit = crate::parse::MAX_AMOUNT)]
    PrincipalTooLarge(InvestmentId),

    #[error("investment {0} does not exist")]
    UnknownInvestment(InvestmentId),

    #[error("'{0}' is not a valid month (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("ledger data is malformed: {0}")]
    Codec(String),

    #[error("ledger data contains identifier {0} more than once")]
    DuplicateId(u64),
}

impl LedgerError {
    /// Whether the error comes from user input rather than stored data
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LedgerError::MissingField(_)
                | LedgerError::InvalidDate { .. }
                | LedgerError::InvalidAmount { .. }
                | LedgerError::AmountOutOfRange { .. }
                | LedgerError::PrincipalTooLarge(_)
                | LedgerError::UnknownInvestment(_)
                | LedgerError::InvalidMonth(_)
        )
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Codec(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
