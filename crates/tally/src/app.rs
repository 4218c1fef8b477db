#[cfg(feature = "native")]
use std::path::PathBuf;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use tally_core::LedgerError;

use crate::actions::{self, ActionResult};
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::event::{AppKeyEvent, KeyCode};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::platform::Storage;
use crate::screens::{
    income::IncomeScreen, investments::InvestmentsScreen, overview::OverviewScreen,
};
use crate::state::{AppState, MessageModal, ModalAction, ModalState, TabId, today};

pub struct App {
    state: AppState,
    tab_bar: TabBar,
    status_bar: StatusBar,
    overview_screen: OverviewScreen,
    income_screen: IncomeScreen,
    investments_screen: InvestmentsScreen,
}

impl App {
    /// Create the app around a storage backend, loading the ledger from it.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            state: AppState::new(storage, today()),
            tab_bar: TabBar,
            status_bar: StatusBar,
            overview_screen: OverviewScreen,
            income_screen: IncomeScreen,
            investments_screen: InvestmentsScreen,
        }
    }

    /// Create app backed by files in `data_dir`
    #[cfg(feature = "native")]
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        tracing::info!(data_dir = %data_dir.display(), "Opening data directory");
        Self::new(Box::new(crate::platform::NativeStorage::new(data_dir)))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set the month filter, `YYYY-MM` or empty for all months
    pub fn set_month(&mut self, month: &str) -> Result<(), LedgerError> {
        self.state.set_month(month)
    }

    pub fn should_exit(&self) -> bool {
        self.state.exit
    }

    /// Clear a pending exit request, returning whether there was one
    pub fn take_exit_request(&mut self) -> bool {
        std::mem::take(&mut self.state.exit)
    }
}

#[cfg(feature = "native")]
impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal) -> color_eyre::Result<()> {
        use crossterm::event::{self, Event, KeyEventKind};

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key_event) = event::read()?
                && key_event.kind == KeyEventKind::Press
            {
                self.handle_key(key_event.into());
            }
        }
        Ok(())
    }
}

impl App {
    pub fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: tab bar, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        self.render_active_screen(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_active_screen(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.active_tab {
            TabId::Overview => self.overview_screen.render(frame, area, &self.state),
            TabId::Income => self.income_screen.render(frame, area, &self.state),
            TabId::Investments => self.investments_screen.render(frame, area, &self.state),
        }
    }

    pub fn handle_key(&mut self, key: AppKeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key, &mut self.state) {
                ModalResult::Confirmed(action) => self.handle_submit(action),
                ModalResult::Cancelled => self.state.close_modal(),
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match &key.code {
            KeyCode::Char('q') if key.no_modifiers() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key.ctrl() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.tab_bar.handle_key(key.clone(), &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        match self.state.active_tab {
            TabId::Overview => self.overview_screen.handle_key(key, &mut self.state),
            TabId::Income => self.income_screen.handle_key(key, &mut self.state),
            TabId::Investments => self.investments_screen.handle_key(key, &mut self.state),
        };
    }

    fn handle_submit(&mut self, action: ModalAction) {
        match actions::handle_submit(&mut self.state, action) {
            ActionResult::Done => self.state.close_modal(),
            ActionResult::Modified => {
                self.state.close_modal();
                self.state.commit();
            }
            ActionResult::Invalid(msg) => {
                self.state.show_alert(MessageModal::error("Invalid input", &msg));
            }
        }
    }
}
