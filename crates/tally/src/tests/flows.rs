use jiff::civil::date;
use rust_decimal_macros::dec;
use tally_core::{Field, InvestmentDraft, MonthFilter, TargetChoice, Tone};

use super::{app_with, press, seeded_storage, set_field, state_with, type_text};
use crate::actions::{self, ActionResult};
use crate::config::AppConfig;
use crate::event::{AppKeyEvent, KeyCode};
use crate::platform::memory::MemoryStorage;
use crate::state::{ModalAction, ModalState, TabId, today};

fn open_form(state: &crate::state::AppState) -> &crate::state::FormModal {
    match &state.modal {
        ModalState::Form(form) => form,
        ModalState::None => panic!("no form open"),
    }
}

#[test]
fn test_add_income_through_keyboard() {
    let storage = MemoryStorage::new();
    let mut app = app_with(&storage);

    press(&mut app, KeyCode::Char('i'));
    assert!(matches!(app.state().modal, ModalState::Form(_)));

    // Date is focused and prefilled with today; replace it
    press(&mut app, KeyCode::Enter);
    for _ in 0..10 {
        press(&mut app, KeyCode::Backspace);
    }
    type_text(&mut app, "2024-03-01");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Salary");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "5000");
    press(&mut app, KeyCode::F(10));

    assert!(matches!(app.state().modal, ModalState::None));
    assert_eq!(app.state().store.incomes().len(), 1);
    assert_eq!(app.state().store.incomes()[0].description, "Salary");
    assert_eq!(storage.save_count(), 1);
    assert!(storage.blob().unwrap().contains("\"desc\":\"Salary\""));

    app.set_month("2024-03").unwrap();
    assert_eq!(app.state().view.income.month_total_text, "¥5000.00");
}

#[test]
fn test_invalid_form_shows_alert_and_keeps_values() {
    let storage = MemoryStorage::new();
    let mut app = app_with(&storage);

    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Bonus");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::F(10));

    let alert = app.state().alert.as_ref().expect("alert shown");
    assert_eq!(alert.message, "Please fill in the amount");
    assert!(app.state().store.is_empty());
    assert_eq!(storage.save_count(), 0);

    // Keys go to the alert, not the form, until it is dismissed
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Enter);
    assert!(app.state().alert.is_none());

    let form = open_form(app.state());
    assert_eq!(form.value(Field::Description), "Bonus");
}

#[test]
fn test_out_of_range_amount_is_rejected_without_saving() {
    let storage = MemoryStorage::new();
    let mut app = app_with(&storage);

    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "50000000000000000000000000000");
    press(&mut app, KeyCode::F(10));

    let alert = app.state().alert.as_ref().expect("alert shown");
    assert!(alert.message.starts_with("Amount '50000000000000000000000000000' is out of range"));
    assert!(matches!(app.state().modal, ModalState::Form(_)));
    assert!(app.state().store.is_empty());
    assert_eq!(storage.save_count(), 0);
    assert!(storage.blob().is_none());
}

#[test]
fn test_top_up_past_limit_keeps_position() {
    let storage = MemoryStorage::new();
    let mut state = state_with(&storage, date(2024, 3, 15));
    state
        .store
        .add_or_top_up_investment(&InvestmentDraft::new_position(
            "2024-03-01",
            "Fund A",
            "9999999999999",
        ))
        .unwrap();
    state.refresh();

    state.open_modal(ModalAction::AddInvestment);
    if let ModalState::Form(form) = &mut state.modal {
        form.fields[0].select_next();
        form.sync_visibility();
    }
    set_field(&mut state, Field::Amount, "1");

    let result = actions::handle_submit(&mut state, ModalAction::AddInvestment);
    assert!(matches!(result, ActionResult::Invalid(msg) if msg.starts_with("Topping up")));
    assert_eq!(state.store.investments()[0].principal, dec!(9999999999999));
    assert_eq!(storage.save_count(), 0);
}

#[test]
fn test_esc_closes_form_without_changes() {
    let storage = MemoryStorage::new();
    let mut app = app_with(&storage);

    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Esc);

    assert!(matches!(app.state().modal, ModalState::None));
    assert_eq!(storage.save_count(), 0);
}

#[test]
fn test_open_modal_fills_today() {
    let storage = MemoryStorage::new();
    let mut state = state_with(&storage, date(2024, 3, 15));
    let today = today().to_string();

    state.open_modal(ModalAction::AddIncome);
    assert_eq!(open_form(&state).value(Field::Date), today);

    state.open_modal(ModalAction::RecordReturn);
    assert_eq!(open_form(&state).value(Field::Date), today);
}

#[test]
fn test_investment_form_resets_to_new_position() {
    let storage = seeded_storage(date(2024, 3, 1));
    let mut state = state_with(&storage, date(2024, 3, 15));

    state.open_modal(ModalAction::AddInvestment);
    if let ModalState::Form(form) = &mut state.modal {
        form.fields[0].select_next();
        form.sync_visibility();
        assert!(!form.field(Field::Name).unwrap().visible);
    }
    state.close_modal();

    state.open_modal(ModalAction::AddInvestment);
    let form = open_form(&state);
    assert_eq!(form.target(Field::Target), Some(TargetChoice::New));
    assert!(form.field(Field::Name).unwrap().visible);
}

#[test]
fn test_top_up_through_form() {
    let storage = seeded_storage(date(2024, 3, 1));
    let mut state = state_with(&storage, date(2024, 3, 15));

    state.open_modal(ModalAction::AddInvestment);
    if let ModalState::Form(form) = &mut state.modal {
        form.fields[0].select_next();
        form.sync_visibility();
    }
    set_field(&mut state, Field::Amount, "500");
    set_field(&mut state, Field::Date, "2024-03-20");

    let result = actions::handle_submit(&mut state, ModalAction::AddInvestment);
    assert_eq!(result, ActionResult::Modified);

    let position = &state.store.investments()[0];
    assert_eq!(position.principal, dec!(1500));
    assert_eq!(position.last_update, date(2024, 3, 20));
    assert_eq!(state.store.investments().len(), 1);
}

#[test]
fn test_record_return_preselects_highlighted_position() {
    let storage = MemoryStorage::new();
    let mut state = state_with(&storage, date(2024, 3, 15));
    for name in ["Fund A", "Fund B"] {
        state
            .store
            .add_or_top_up_investment(&InvestmentDraft::new_position("2024-03-01", name, "100"))
            .unwrap();
    }
    state.refresh();
    state.investments_state.selected_index = 1;

    state.open_modal(ModalAction::RecordReturn);

    let second = state.store.investments()[1].id;
    assert_eq!(
        open_form(&state).target(Field::Target),
        Some(TargetChoice::Existing(second))
    );
}

#[test]
fn test_record_return_requires_position() {
    let storage = MemoryStorage::new();
    let mut state = state_with(&storage, date(2024, 3, 15));

    state.open_modal(ModalAction::RecordReturn);
    set_field(&mut state, Field::Amount, "25");

    let result = actions::handle_submit(&mut state, ModalAction::RecordReturn);
    assert_eq!(
        result,
        ActionResult::Invalid("Please fill in the investment".to_string())
    );
    assert!(matches!(state.modal, ModalState::Form(_)));
}

#[test]
fn test_new_position_then_loss_renders_loss_tone() {
    let storage = MemoryStorage::new();
    let mut state = state_with(&storage, date(2024, 3, 15));

    state.open_modal(ModalAction::AddInvestment);
    set_field(&mut state, Field::Name, "Fund A");
    set_field(&mut state, Field::Amount, "1000");
    assert_eq!(
        actions::handle_submit(&mut state, ModalAction::AddInvestment),
        ActionResult::Modified
    );
    state.close_modal();
    state.commit();

    // The only position is highlighted, so the form preselects it
    state.open_modal(ModalAction::RecordReturn);
    set_field(&mut state, Field::Amount, "-50");
    assert_eq!(
        actions::handle_submit(&mut state, ModalAction::RecordReturn),
        ActionResult::Modified
    );
    state.close_modal();
    state.commit();

    assert_eq!(state.view.investments.total_return_text, "¥-50.00");
    assert_eq!(state.view.investments.total_return_tone, Tone::Loss);
    assert_eq!(storage.save_count(), 2);
}

#[test]
fn test_blank_description_uses_configured_placeholder() {
    let storage = MemoryStorage::new().with_config(AppConfig {
        income_placeholder: "Paycheck".to_string(),
        ..Default::default()
    });
    let mut state = state_with(&storage, date(2024, 3, 15));

    state.open_modal(ModalAction::AddIncome);
    set_field(&mut state, Field::Amount, "1200");
    actions::handle_submit(&mut state, ModalAction::AddIncome);

    assert_eq!(state.store.incomes()[0].description, "Paycheck");
}

#[test]
fn test_save_failure_keeps_change_and_reports() {
    let storage = MemoryStorage::new();
    storage.fail_saves();
    let mut state = state_with(&storage, date(2024, 3, 15));

    state.open_modal(ModalAction::AddIncome);
    set_field(&mut state, Field::Amount, "10");
    actions::handle_submit(&mut state, ModalAction::AddIncome);
    state.close_modal();
    state.commit();

    assert_eq!(state.store.incomes().len(), 1);
    assert!(
        state
            .error_message
            .as_deref()
            .unwrap()
            .starts_with("Failed to save")
    );
    assert!(storage.blob().is_none());
}

#[test]
fn test_unreadable_ledger_is_not_overwritten() {
    let storage = MemoryStorage::with_blob("{broken");
    let mut state = state_with(&storage, date(2024, 3, 15));

    assert!(state.store.is_empty());
    assert!(state.error_message.is_some());

    state.open_modal(ModalAction::AddIncome);
    set_field(&mut state, Field::Amount, "10");
    actions::handle_submit(&mut state, ModalAction::AddIncome);
    state.commit();

    assert_eq!(storage.blob().as_deref(), Some("{broken"));
}

#[test]
fn test_tab_keys() {
    let mut app = app_with(&MemoryStorage::new());
    assert_eq!(app.state().active_tab, TabId::Overview);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().active_tab, TabId::Investments);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.state().active_tab, TabId::Overview);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().active_tab, TabId::Income);
}

#[cfg(feature = "native")]
#[test]
fn test_back_tab_cycles_backwards() {
    let mut app = app_with(&MemoryStorage::new());
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.state().active_tab, TabId::Investments);
}

#[test]
fn test_income_month_keys() {
    let storage = MemoryStorage::new();
    let mut app = app_with(&storage);
    app.set_month("2024-01").unwrap();
    press(&mut app, KeyCode::Char('2'));

    press(&mut app, KeyCode::Char('h'));
    assert_eq!(app.state().month, MonthFilter::parse("2023-12").unwrap());
    press(&mut app, KeyCode::Char(']'));
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.state().month, MonthFilter::parse("2024-02").unwrap());

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().month, MonthFilter::All);
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.state().month, MonthFilter::current(today()));
}

#[test]
fn test_quit_keys() {
    let mut app = app_with(&MemoryStorage::new());

    // Typed into the form, not treated as quit
    press(&mut app, KeyCode::Char('i'));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_exit());

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_exit());

    assert!(app.take_exit_request());
    app.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('c')));
    assert!(app.should_exit());
}

#[test]
fn test_invalid_month_argument() {
    let mut app = app_with(&MemoryStorage::new());
    assert!(app.set_month("2024-13").is_err());
    assert!(app.set_month("").is_ok());
    assert_eq!(app.state().month, MonthFilter::All);
}
