// Ledger actions - the three forms and the store operation behind each

use jiff::civil::Date;
use tally_core::view::SelectorOption;
use tally_core::{Field, IncomeDraft, InvestmentDraft, LedgerError, ReturnDraft, TargetChoice};

use crate::state::{AppState, FormField, FormModal, ModalAction, SelectOption};

use super::ActionResult;

/// Label of the empty choice in the return form's position selector
pub const CHOOSE_POSITION_LABEL: &str = "Select...";

fn to_select_options(options: &[SelectorOption]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|option| SelectOption {
            label: option.label.clone(),
            target: Some(option.target),
        })
        .collect()
}

/// Build the empty form for `action`, with every date field set to `today`.
pub fn build_form(state: &AppState, action: ModalAction, today: Date) -> FormModal {
    let today = today.to_string();
    let selectors = &state.view.selectors;

    let fields = match action {
        ModalAction::AddIncome => vec![
            FormField::date(Field::Date, "Date (YYYY-MM-DD)", &today),
            FormField::text(Field::Description, "Description"),
            FormField::amount(Field::Amount, "Amount"),
        ],
        ModalAction::AddInvestment => vec![
            // Always starts on "new position"
            FormField::select(
                Field::Target,
                "Investment",
                to_select_options(&selectors.top_up),
                0,
            ),
            FormField::text(Field::Name, "Name"),
            FormField::amount(Field::Amount, "Amount"),
            FormField::date(Field::Date, "Date (YYYY-MM-DD)", &today),
        ],
        ModalAction::RecordReturn => {
            let mut options = vec![SelectOption {
                label: CHOOSE_POSITION_LABEL.to_string(),
                target: None,
            }];
            options.extend(to_select_options(&selectors.record_return));

            let preselected = state
                .selected_investment()
                .and_then(|id| {
                    options
                        .iter()
                        .position(|o| o.target == Some(TargetChoice::Existing(id)))
                })
                .unwrap_or(0);

            vec![
                FormField::select(Field::Target, "Investment", options, preselected),
                FormField::amount(Field::Amount, "Total return to date"),
                FormField::date(Field::Date, "Date (YYYY-MM-DD)", &today),
            ]
        }
    };

    FormModal::new(action.title(), fields, action)
}

fn rejected(action: ModalAction, err: LedgerError) -> ActionResult {
    if err.is_input_error() {
        tracing::debug!(?action, error = %err, "Form rejected");
    } else {
        tracing::warn!(?action, error = %err, "Form rejected");
    }
    let message = err.to_string();
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => ActionResult::invalid(first.to_uppercase().chain(chars).collect::<String>()),
        None => ActionResult::invalid(message),
    }
}

pub fn handle_add_income(state: &mut AppState, form: &FormModal) -> ActionResult {
    let draft = IncomeDraft::new(
        form.value(Field::Date),
        form.value(Field::Description),
        form.value(Field::Amount),
    )
    .with_placeholder(&state.config.income_placeholder);

    match state.store.add_income(&draft) {
        Ok(id) => {
            tracing::info!(%id, date = %draft.date, "Income recorded");
            ActionResult::Modified
        }
        Err(e) => rejected(ModalAction::AddIncome, e),
    }
}

pub fn handle_add_investment(state: &mut AppState, form: &FormModal) -> ActionResult {
    let draft = InvestmentDraft {
        date: form.value(Field::Date).to_string(),
        amount: form.value(Field::Amount).to_string(),
        target: form.target(Field::Target).unwrap_or(TargetChoice::New),
        name: form.value(Field::Name).to_string(),
    };

    match state.store.add_or_top_up_investment(&draft) {
        Ok(id) => {
            match draft.target {
                TargetChoice::New => tracing::info!(%id, "Investment opened"),
                TargetChoice::Existing(_) => tracing::info!(%id, "Investment topped up"),
            }
            ActionResult::Modified
        }
        Err(e) => rejected(ModalAction::AddInvestment, e),
    }
}

pub fn handle_record_return(state: &mut AppState, form: &FormModal) -> ActionResult {
    let target = match form.target(Field::Target) {
        Some(TargetChoice::Existing(id)) => Some(id),
        _ => None,
    };
    let draft = ReturnDraft::new(target, form.value(Field::Amount), form.value(Field::Date));

    match state.store.record_investment_return(&draft) {
        Ok(()) => {
            tracing::info!(id = ?draft.target, "Return recorded");
            ActionResult::Modified
        }
        Err(e) => rejected(ModalAction::RecordReturn, e),
    }
}
