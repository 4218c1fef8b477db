use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{FieldType, FormField, FormModal};

use super::ModalResult;
use super::helpers::{
    HelpText, MultiLineHelp, calculate_scroll, render_cursor_line, render_modal_frame,
};

const MODAL_WIDTH: u16 = 60;

/// Render the form modal
pub fn render_form_modal(frame: &mut Frame, modal: &FormModal) {
    let visible = modal.visible_fields().count();

    // Each field: 1 line label + 3 lines input box (1 content + 2 border)
    let field_height = visible as u16 * 4;
    let modal_height = field_height + 6;

    let mut constraints = vec![Constraint::Length(1)]; // Top spacing
    constraints.extend(std::iter::repeat_n(Constraint::Length(4), visible));
    constraints.push(Constraint::Min(0)); // Spacing
    constraints.push(Constraint::Length(2)); // Help text

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        modal_height,
        Color::Cyan,
        &constraints,
    );

    for (slot, (idx, field)) in modal.visible_fields().enumerate() {
        let is_focused = idx == modal.focused_field;
        render_field(frame, mf.chunks[slot + 1], field, is_focused, modal.editing);
    }

    let help = if modal.editing {
        MultiLineHelp::new()
            .line(
                HelpText::new()
                    .key("EDITING:", Color::Cyan, "Type to enter text")
                    .key("[F10/Ctrl+S]", Color::Cyan, "Submit"),
            )
            .line(
                HelpText::new()
                    .key("[Enter]", Color::Green, "Done field")
                    .key("[Esc]", Color::Yellow, "Stop editing"),
            )
            .build()
    } else {
        MultiLineHelp::new()
            .line(
                HelpText::new()
                    .key("[j/k/Tab]", Color::DarkGray, "Navigate")
                    .key("[Enter]", Color::Green, "Edit field")
                    .key("[←/→]", Color::DarkGray, "Choose"),
            )
            .line(
                HelpText::new()
                    .key("[F10/Ctrl+S]", Color::Cyan, "Submit")
                    .key("[Esc]", Color::Yellow, "Cancel"),
            )
            .build()
    };
    frame.render_widget(help, mf.chunks[visible + 2]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_focused: bool,
    is_editing: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3)])
        .split(area);

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let label = Paragraph::new(Line::from(Span::styled(field.label.as_str(), label_style)));
    frame.render_widget(label, chunks[0]);

    let border_color = if is_focused && is_editing {
        Color::Cyan
    } else if is_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let input_inner = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    if is_focused && is_editing && field.field_type != FieldType::Select {
        let input_width = (input_inner.width as usize).saturating_sub(1);
        let scrolled = calculate_scroll(&field.value, field.cursor_pos, input_width + 2);
        let input_line = render_cursor_line(&scrolled.display_value, scrolled.cursor_pos);
        frame.render_widget(Paragraph::new(input_line), input_inner);
    } else {
        let display = match field.field_type {
            FieldType::Select => format!("◀ {} ▶", field.selected_label()),
            _ => field.value.clone(),
        };
        frame.render_widget(Paragraph::new(display), input_inner);
    }
}

/// Ctrl+Enter is unreliable in some terminals, so Ctrl+S and F10 submit too
fn is_submit(key: &AppKeyEvent) -> bool {
    match &key.code {
        KeyCode::Enter | KeyCode::Char('s') => key.ctrl(),
        KeyCode::F(10) => true,
        _ => false,
    }
}

/// Handle key events for form modal
pub fn handle_form_key(key: &AppKeyEvent, modal: &mut FormModal) -> ModalResult {
    if is_submit(key) {
        return ModalResult::Confirmed(modal.action);
    }

    if modal.editing {
        handle_editing_key(key, modal)
    } else {
        handle_navigation_key(key, modal)
    }
}

fn handle_editing_key(key: &AppKeyEvent, modal: &mut FormModal) -> ModalResult {
    if matches!(&key.code, KeyCode::Enter | KeyCode::Esc) {
        modal.editing = false;
        return ModalResult::Continue;
    }

    let Some(field) = modal.focused_mut() else {
        return ModalResult::Continue;
    };

    match &key.code {
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_cursor_left(),
        KeyCode::Right => field.move_cursor_right(),
        KeyCode::Home => field.move_cursor_home(),
        KeyCode::End => field.move_cursor_end(),
        KeyCode::Char(c) if !key.ctrl() && field.accepts(*c) => field.insert_char(*c),
        _ => {}
    }
    ModalResult::Continue
}

fn cycle_select(modal: &mut FormModal, forward: bool) {
    if let Some(field) = modal.focused_mut()
        && field.field_type == FieldType::Select
    {
        if forward {
            field.select_next();
        } else {
            field.select_prev();
        }
        modal.sync_visibility();
    }
}

fn handle_navigation_key(key: &AppKeyEvent, modal: &mut FormModal) -> ModalResult {
    if key.is_back_tab() {
        modal.focus_prev();
        return ModalResult::Continue;
    }

    match &key.code {
        KeyCode::Esc => return ModalResult::Cancelled,
        KeyCode::Enter | KeyCode::Char('e') => {
            let is_select = modal
                .focused()
                .is_some_and(|field| field.field_type == FieldType::Select);
            if is_select {
                cycle_select(modal, true);
            } else {
                if let Some(field) = modal.focused_mut() {
                    field.move_cursor_end();
                }
                modal.editing = true;
            }
        }
        KeyCode::Tab | KeyCode::Char('j') | KeyCode::Down => modal.focus_next(),
        KeyCode::Char('k') | KeyCode::Up => modal.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => cycle_select(modal, false),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => cycle_select(modal, true),
        _ => {}
    }
    ModalResult::Continue
}
