mod form;
mod helpers;
mod message;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction, ModalState};

pub use form::{handle_form_key, render_form_modal};
pub use helpers::{HelpText, MultiLineHelp, render_modal_frame};
pub use message::{handle_message_key, render_message_modal};

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Form submitted for this action
    Confirmed(ModalAction),
    /// Modal was cancelled
    Cancelled,
    /// Key was handled, modal still active
    Continue,
}

/// Render the active modal, then the alert on top of it
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    if let ModalState::Form(form) = &state.modal {
        render_form_modal(frame, form);
    }
    if let Some(alert) = &state.alert {
        render_message_modal(frame, alert);
    }
}

/// Handle key events for the active modal.
///
/// An open alert swallows every key until it is dismissed; the form beneath
/// keeps its values.
pub fn handle_modal_key(key: AppKeyEvent, state: &mut AppState) -> ModalResult {
    if state.alert.is_some() {
        if handle_message_key(&key) == ModalResult::Cancelled {
            state.alert = None;
        }
        return ModalResult::Continue;
    }

    match &mut state.modal {
        ModalState::None => ModalResult::Continue,
        ModalState::Form(form) => handle_form_key(&key, form),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
