use jiff::civil::Date;
use tally_core::view::{self, LedgerView};
use tally_core::{InvestmentId, LedgerError, LedgerStore, MonthFilter};

use crate::actions;
use crate::config::AppConfig;
use crate::platform::{Storage, StorageError};

use super::{MessageModal, ModalAction, ModalState, TabId};

/// Today's date in the system time zone
pub fn today() -> Date {
    jiff::Zoned::now().date()
}

#[derive(Debug, Default)]
pub struct IncomeState {
    pub selected_index: usize,
}

#[derive(Debug, Default)]
pub struct InvestmentsState {
    pub selected_index: usize,
}

pub struct AppState {
    pub active_tab: TabId,
    /// The ledger; every change goes through its three operations
    pub store: LedgerStore,
    /// Restricts the income list and the month total
    pub month: MonthFilter,
    pub config: AppConfig,
    /// Rendered from `store` and `month`, rebuilt after every change
    pub view: LedgerView,

    // Per-screen state
    pub income_state: IncomeState,
    pub investments_state: InvestmentsState,

    pub modal: ModalState,
    /// Blocking alert drawn over the open form
    pub alert: Option<MessageModal>,
    pub error_message: Option<String>,
    pub exit: bool,

    storage: Box<dyn Storage>,
    /// Set when the stored ledger could not be read; saving would overwrite it
    save_blocked: Option<String>,
}

impl AppState {
    /// Load the ledger and preferences from `storage`.
    ///
    /// Unreadable preferences fall back to the defaults. An unreadable ledger
    /// starts the session empty and leaves the stored copy alone.
    pub fn new(storage: Box<dyn Storage>, today: Date) -> Self {
        let config = storage.load_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        });

        let mut error_message = None;
        let mut save_blocked = None;
        let store = match storage.load() {
            Ok(store) => {
                tracing::info!(
                    location = %storage.location(),
                    incomes = store.incomes().len(),
                    investments = store.investments().len(),
                    "Ledger loaded"
                );
                store
            }
            Err(e) => {
                tracing::error!(location = %storage.location(), error = %e, "Failed to load ledger");
                let message = format!("Failed to load ledger: {e}");
                error_message = Some(message.clone());
                save_blocked = Some(message);
                LedgerStore::default()
            }
        };

        let month = MonthFilter::current(today);
        let view = view::render(&store, &month, &config.view_options());

        Self {
            active_tab: TabId::Overview,
            store,
            month,
            config,
            view,
            income_state: IncomeState::default(),
            investments_state: InvestmentsState::default(),
            modal: ModalState::None,
            alert: None,
            error_message,
            exit: false,
            storage,
            save_blocked,
        }
    }

    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set the month filter from `YYYY-MM`; an empty string shows all months.
    pub fn set_month(&mut self, month: &str) -> Result<(), LedgerError> {
        self.set_month_filter(MonthFilter::parse(month)?);
        Ok(())
    }

    pub fn set_month_filter(&mut self, month: MonthFilter) {
        self.month = month;
        self.income_state.selected_index = 0;
        self.refresh();
    }

    /// Re-render the view and keep list selections in range.
    pub fn refresh(&mut self) {
        self.view = view::render(&self.store, &self.month, &self.config.view_options());

        let incomes = self.view.income.rows.len();
        self.income_state.selected_index = self
            .income_state
            .selected_index
            .min(incomes.saturating_sub(1));

        let positions = self.view.investments.rows.len();
        self.investments_state.selected_index = self
            .investments_state
            .selected_index
            .min(positions.saturating_sub(1));
    }

    /// Write the whole store to storage.
    pub fn save(&self) -> Result<(), StorageError> {
        if let Some(reason) = &self.save_blocked {
            return Err(StorageError::NotAvailable(format!(
                "not saving over unreadable data ({reason})"
            )));
        }
        self.storage.save(&self.store)?;
        tracing::debug!(location = %self.storage.location(), "Ledger saved");
        Ok(())
    }

    /// Persist after a successful mutation, then re-render.
    ///
    /// A failed save keeps the in-memory change and reports in the status bar.
    pub fn commit(&mut self) {
        if let Err(e) = self.save() {
            tracing::error!(error = %e, "Failed to save ledger");
            self.set_error(format!("Failed to save: {e}"));
        }
        self.refresh();
    }

    /// Position highlighted on the investments screen
    pub fn selected_investment(&self) -> Option<InvestmentId> {
        self.view
            .investments
            .rows
            .get(self.investments_state.selected_index)
            .map(|row| row.id)
    }

    /// Open a fresh form with every date field set to today.
    pub fn open_modal(&mut self, action: ModalAction) {
        let form = actions::build_form(self, action, today());
        tracing::debug!(?action, "Opening form");
        self.alert = None;
        self.modal = ModalState::Form(form);
    }

    pub fn close_modal(&mut self) {
        self.alert = None;
        self.modal = ModalState::None;
    }

    pub fn show_alert(&mut self, alert: MessageModal) {
        self.alert = Some(alert);
    }
}
