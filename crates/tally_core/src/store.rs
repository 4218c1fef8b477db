//! The ledger store: two ordered sequences and the operations that mutate them.
//!
//! The store is the only source of truth. It is created once from the
//! persisted blob (or empty), mutated through [`LedgerStore::add_income`],
//! [`LedgerStore::add_or_top_up_investment`] and
//! [`LedgerStore::record_investment_return`], and written back out whole with
//! [`LedgerStore::to_json`] after each successful call.

use std::collections::HashSet;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Field, LedgerError, Result};
use crate::model::{
    IncomeDraft, IncomeEntry, IncomeId, InvestmentDraft, InvestmentId, InvestmentPosition,
    ReturnDraft, TargetChoice,
};
use crate::parse;

/// Fixed key the serialized store lives under
pub const LEDGER_KEY: &str = "myTrackerData";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStore {
    #[serde(default)]
    incomes: Vec<IncomeEntry>,
    #[serde(default)]
    investments: Vec<InvestmentPosition>,
}

impl LedgerStore {
    /// Build a store from existing records, rejecting repeated identifiers
    pub fn from_parts(
        incomes: Vec<IncomeEntry>,
        investments: Vec<InvestmentPosition>,
    ) -> Result<Self> {
        let store = Self {
            incomes,
            investments,
        };
        store.check_unique_ids()?;
        Ok(store)
    }

    pub fn incomes(&self) -> &[IncomeEntry] {
        &self.incomes
    }

    pub fn investments(&self) -> &[InvestmentPosition] {
        &self.investments
    }

    pub fn investment(&self, id: InvestmentId) -> Option<&InvestmentPosition> {
        self.investments.iter().find(|i| i.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.investments.is_empty()
    }

    // ========== Operations ==========

    /// Append a new income entry.
    ///
    /// A blank description is replaced by the draft's placeholder.
    pub fn add_income(&mut self, draft: &IncomeDraft) -> Result<IncomeId> {
        let date = parse::required_date(Field::Date, &draft.date)?;
        let amount = parse::positive_amount(Field::Amount, &draft.amount)?;
        let description = match draft.description.trim() {
            "" => draft.placeholder.clone(),
            text => text.to_string(),
        };

        let id = IncomeId(self.next_id());
        self.incomes.push(IncomeEntry {
            id,
            date,
            description,
            amount,
        });
        Ok(id)
    }

    /// Open a new position or add capital to an existing one.
    ///
    /// Topping up raises the principal by the draft amount and moves the last
    /// update date; the reported return is left alone. The principal stays
    /// within [`parse::MAX_AMOUNT`].
    pub fn add_or_top_up_investment(&mut self, draft: &InvestmentDraft) -> Result<InvestmentId> {
        let date = parse::required_date(Field::Date, &draft.date)?;
        let amount = parse::positive_amount(Field::Amount, &draft.amount)?;

        match draft.target {
            TargetChoice::New => {
                let name = parse::required_text(Field::Name, &draft.name)?;
                let id = InvestmentId(self.next_id());
                self.investments.push(InvestmentPosition {
                    id,
                    name,
                    principal: amount,
                    current_return: Decimal::ZERO,
                    last_update: date,
                });
                Ok(id)
            }
            TargetChoice::Existing(id) => {
                let position = self.investment_mut(id)?;
                let principal = position
                    .principal
                    .checked_add(amount)
                    .filter(|total| *total <= parse::MAX_AMOUNT)
                    .ok_or(LedgerError::PrincipalTooLarge(id))?;
                position.principal = principal;
                position.last_update = date;
                Ok(id)
            }
        }
    }

    /// Replace a position's reported return. The amount may be negative.
    pub fn record_investment_return(&mut self, draft: &ReturnDraft) -> Result<()> {
        let id = draft.target.ok_or(LedgerError::MissingField(Field::Target))?;
        let amount = parse::required_amount(Field::Amount, &draft.amount)?;
        let date = parse::required_date(Field::Date, &draft.date)?;

        let position = self.investment_mut(id)?;
        position.current_return = amount;
        position.last_update = date;
        Ok(())
    }

    // ========== Persistence ==========

    /// Serialize the whole store as the persisted JSON document
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a store from its persisted JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let store: LedgerStore = serde_json::from_str(json)?;
        store.check_unique_ids()?;
        Ok(store)
    }

    // ========== Helpers ==========

    fn investment_mut(&mut self, id: InvestmentId) -> Result<&mut InvestmentPosition> {
        self.investments
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(LedgerError::UnknownInvestment(id))
    }

    fn highest_id(&self) -> u64 {
        let incomes = self.incomes.iter().map(|i| i.id.0);
        let investments = self.investments.iter().map(|i| i.id.0);
        incomes.chain(investments).max().unwrap_or(0)
    }

    /// Current time in milliseconds, bumped past every identifier in use
    fn next_id(&self) -> u64 {
        let now = u64::try_from(Timestamp::now().as_millisecond()).unwrap_or(0);
        now.max(self.highest_id().saturating_add(1))
    }

    fn check_unique_ids(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.incomes.len());
        for entry in &self.incomes {
            if !seen.insert(entry.id.0) {
                return Err(LedgerError::DuplicateId(entry.id.0));
            }
        }

        seen.clear();
        for position in &self.investments {
            if !seen.insert(position.id.0) {
                return Err(LedgerError::DuplicateId(position.id.0));
            }
        }
        Ok(())
    }
}
