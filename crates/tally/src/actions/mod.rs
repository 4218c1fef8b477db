// Actions module - turns submitted forms into ledger operations
//
// Form construction lives here too, so each form and the draft it produces
// are defined side by side.

mod ledger;

pub use ledger::*;

use crate::state::{AppState, FormModal, ModalAction, ModalState};

/// Result of an action handler
#[derive(Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// Nothing changed; close the modal
    Done,
    /// The store changed; close the modal, persist and re-render
    Modified,
    /// The form was rejected; keep it open behind an alert
    Invalid(String),
}

impl ActionResult {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ActionResult::Invalid(msg.into())
    }
}

/// Run the ledger operation behind a submitted form.
pub fn handle_submit(state: &mut AppState, action: ModalAction) -> ActionResult {
    // Take the form out while the store is borrowed mutably
    let form = match std::mem::replace(&mut state.modal, ModalState::None) {
        ModalState::Form(form) => form,
        ModalState::None => return ActionResult::Done,
    };

    let result = dispatch(state, action, &form);
    state.modal = ModalState::Form(form);
    result
}

fn dispatch(state: &mut AppState, action: ModalAction, form: &FormModal) -> ActionResult {
    match action {
        ModalAction::AddIncome => handle_add_income(state, form),
        ModalAction::AddInvestment => handle_add_investment(state, form),
        ModalAction::RecordReturn => handle_record_return(state, form),
    }
}
