use ratatui::{
    Frame,
    layout::Constraint,
    style::Color,
    widgets::{Paragraph, Wrap},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::state::MessageModal;

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const ALERT_WIDTH: u16 = 50;
/// Border, padding and hint rows around the wrapped message
const ALERT_CHROME: u16 = 6;

/// Draw the alert centered over whatever is below it
pub fn render_message_modal(frame: &mut Frame, alert: &MessageModal) {
    let text_width = usize::from(ALERT_WIDTH - 4);
    let wrapped_rows = alert.message.chars().count().div_ceil(text_width).max(1) as u16;
    let height = (ALERT_CHROME + wrapped_rows).min(frame.area().height.saturating_sub(2));

    let mf = render_modal_frame(
        frame,
        &alert.title,
        ALERT_WIDTH,
        height,
        Color::Red,
        &[
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    frame.render_widget(
        Paragraph::new(alert.message.as_str()).wrap(Wrap { trim: true }),
        mf.chunks[1],
    );
    frame.render_widget(
        HelpText::new()
            .key("[Enter/Esc]", Color::Green, "Back to the form")
            .build(),
        mf.chunks[3],
    );
}

/// Enter or Esc dismisses the alert; everything else is swallowed
pub fn handle_message_key(key: &AppKeyEvent) -> ModalResult {
    match &key.code {
        KeyCode::Enter | KeyCode::Esc => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
