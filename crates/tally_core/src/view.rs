//! Pure read path from the store to displayable rows and totals.
//!
//! [`render`] is re-run after every mutation and whenever the month filter
//! changes. It never touches the store, so the same inputs always give the
//! same [`LedgerView`].

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::format::{DEFAULT_CURRENCY_SYMBOL, format_amount, format_money, format_signed};
use crate::model::{IncomeId, InvestmentId, TargetChoice};
use crate::month::MonthFilter;
use crate::store::LedgerStore;

/// Presentation settings for [`render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    pub currency_symbol: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Whether a value reads as a gain (zero included) or a loss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gain,
    Loss,
}

impl Tone {
    pub fn of(value: Decimal) -> Self {
        if value >= Decimal::ZERO {
            Tone::Gain
        } else {
            Tone::Loss
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeRow {
    pub id: IncomeId,
    pub description: String,
    pub date: Date,
    /// `+5000.00`
    pub amount_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeView {
    pub filter: MonthFilter,
    /// Matching entries, newest first
    pub rows: Vec<IncomeRow>,
    pub month_total: Decimal,
    pub month_total_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentRow {
    pub id: InvestmentId,
    pub name: String,
    pub principal_text: String,
    pub return_text: String,
    pub tone: Tone,
    pub last_update: Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentView {
    pub rows: Vec<InvestmentRow>,
    pub total_principal: Decimal,
    pub total_principal_text: String,
    pub total_return: Decimal,
    pub total_return_text: String,
    pub total_return_tone: Tone,
}

/// One entry of a position selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub target: TargetChoice,
    pub label: String,
}

/// Label of the "create new" entry in the top-up selector
pub const NEW_POSITION_LABEL: &str = "+ New investment...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOptions {
    /// "Create new" first, then every position
    pub top_up: Vec<SelectorOption>,
    /// Every position
    pub record_return: Vec<SelectorOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerView {
    pub income: IncomeView,
    pub investments: InvestmentView,
    pub selectors: SelectorOptions,
}

pub fn render(store: &LedgerStore, filter: &MonthFilter, options: &ViewOptions) -> LedgerView {
    LedgerView {
        income: render_income(store, filter, options),
        investments: render_investments(store, options),
        selectors: selector_options(store),
    }
}

pub fn render_income(
    store: &LedgerStore,
    filter: &MonthFilter,
    options: &ViewOptions,
) -> IncomeView {
    let mut matching: Vec<_> = store
        .incomes()
        .iter()
        .filter(|entry| filter.matches(entry.date))
        .collect();
    // Stable: entries on the same day keep insertion order
    matching.sort_by(|a, b| b.date.cmp(&a.date));

    // Saturating: a hand-edited blob can hold amounts no form accepts
    let month_total = matching
        .iter()
        .fold(Decimal::ZERO, |total, entry| total.saturating_add(entry.amount));

    let rows = matching
        .into_iter()
        .map(|entry| IncomeRow {
            id: entry.id,
            description: entry.description.clone(),
            date: entry.date,
            amount_text: format!("+{}", format_amount(entry.amount)),
        })
        .collect();

    IncomeView {
        filter: *filter,
        rows,
        month_total,
        month_total_text: format_money(&options.currency_symbol, month_total),
    }
}

pub fn render_investments(store: &LedgerStore, options: &ViewOptions) -> InvestmentView {
    let mut total_principal = Decimal::ZERO;
    let mut total_return = Decimal::ZERO;

    let rows = store
        .investments()
        .iter()
        .map(|position| {
            total_principal = total_principal.saturating_add(position.principal);
            total_return = total_return.saturating_add(position.current_return);
            InvestmentRow {
                id: position.id,
                name: position.name.clone(),
                principal_text: format_money(&options.currency_symbol, position.principal),
                return_text: format_signed(position.current_return),
                tone: Tone::of(position.current_return),
                last_update: position.last_update,
            }
        })
        .collect();

    InvestmentView {
        rows,
        total_principal,
        total_principal_text: format_money(&options.currency_symbol, total_principal),
        total_return,
        total_return_text: format_money(&options.currency_symbol, total_return),
        total_return_tone: Tone::of(total_return),
    }
}

pub fn selector_options(store: &LedgerStore) -> SelectorOptions {
    let positions: Vec<SelectorOption> = store
        .investments()
        .iter()
        .map(|position| SelectorOption {
            target: TargetChoice::Existing(position.id),
            label: position.name.clone(),
        })
        .collect();

    let mut top_up = Vec::with_capacity(positions.len() + 1);
    top_up.push(SelectorOption {
        target: TargetChoice::New,
        label: NEW_POSITION_LABEL.to_string(),
    });
    top_up.extend(positions.iter().cloned());

    SelectorOptions {
        top_up,
        record_return: positions,
    }
}
