//! Application tests driven through the same entry points as the UI
//!
//! - `flows` - Key presses and form submissions against in-memory storage
//! - `render` - Drawing every screen and modal into a test backend

mod flows;
mod render;

use jiff::civil::Date;
use tally_core::{Field, IncomeDraft, InvestmentDraft, LedgerStore, ReturnDraft};

use crate::app::App;
use crate::event::{AppKeyEvent, KeyCode};
use crate::platform::memory::MemoryStorage;
use crate::state::{AppState, ModalState};

pub(crate) fn app_with(storage: &MemoryStorage) -> App {
    App::new(Box::new(storage.clone()))
}

pub(crate) fn state_with(storage: &MemoryStorage, today: Date) -> AppState {
    AppState::new(Box::new(storage.clone()), today)
}

pub(crate) fn press(app: &mut App, code: KeyCode) {
    app.handle_key(AppKeyEvent::plain(code));
}

pub(crate) fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Overwrite a field of the open form
pub(crate) fn set_field(state: &mut AppState, key: Field, value: &str) {
    let ModalState::Form(form) = &mut state.modal else {
        panic!("no form open");
    };
    let field = form
        .fields
        .iter_mut()
        .find(|field| field.key == key)
        .expect("form has no such field");
    field.value = value.to_string();
    field.move_cursor_end();
}

/// Storage preloaded with a ledger of one income and one losing position
pub(crate) fn seeded_storage(today: Date) -> MemoryStorage {
    let today = today.to_string();
    let mut store = LedgerStore::default();
    store
        .add_income(&IncomeDraft::new(&today, "Salary", "5000"))
        .unwrap();
    let id = store
        .add_or_top_up_investment(&InvestmentDraft::new_position(&today, "Fund A", "1000"))
        .unwrap();
    store
        .record_investment_return(&ReturnDraft::new(Some(id), "-50", &today))
        .unwrap();
    MemoryStorage::with_blob(&store.to_json().unwrap())
}
