//! Raw form input handed to the store.
//!
//! Drafts keep the user's text as typed. The store validates a whole draft
//! before applying it, so a rejected draft never changes anything.

use super::InvestmentId;

/// Description used when an income is saved without one
pub const DEFAULT_INCOME_DESCRIPTION: &str = "Income";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeDraft {
    pub date: String,
    pub description: String,
    pub amount: String,
    /// Stored instead of a blank description
    pub placeholder: String,
}

impl IncomeDraft {
    pub fn new(date: &str, description: &str, amount: &str) -> Self {
        Self {
            date: date.to_string(),
            description: description.to_string(),
            amount: amount.to_string(),
            placeholder: DEFAULT_INCOME_DESCRIPTION.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }
}

/// Which position an investment draft applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetChoice {
    /// Open a new position named by the draft
    New,
    /// Top up an existing position
    Existing(InvestmentId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentDraft {
    pub date: String,
    pub amount: String,
    pub target: TargetChoice,
    /// Only read when `target` is [`TargetChoice::New`]
    pub name: String,
}

impl InvestmentDraft {
    pub fn new_position(date: &str, name: &str, amount: &str) -> Self {
        Self {
            date: date.to_string(),
            amount: amount.to_string(),
            target: TargetChoice::New,
            name: name.to_string(),
        }
    }

    pub fn top_up(date: &str, id: InvestmentId, amount: &str) -> Self {
        Self {
            date: date.to_string(),
            amount: amount.to_string(),
            target: TargetChoice::Existing(id),
            name: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnDraft {
    pub target: Option<InvestmentId>,
    /// Total gain (or loss, when negative) to date
    pub amount: String,
    pub date: String,
}

impl ReturnDraft {
    pub fn new(target: Option<InvestmentId>, amount: &str, date: &str) -> Self {
        Self {
            target,
            amount: amount.to_string(),
            date: date.to_string(),
        }
    }
}
