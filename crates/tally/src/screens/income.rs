use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};
use tally_core::MonthFilter;

use crate::components::lists::{calculate_centered_scroll, handle_list_navigation};
use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, ModalAction, today};
use crate::util::styles::{HELP_COLOR, POSITIVE_COLOR, header_style, titled_block};

pub struct IncomeScreen;

impl IncomeScreen {
    fn render_header(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let income = &state.view.income;
        let line = Line::from(vec![
            Span::styled("Month: ", header_style()),
            Span::raw(format!("◀ {} ▶", income.filter.label())),
            Span::raw("    "),
            Span::styled("Total: ", header_style()),
            Span::styled(
                income.month_total_text.clone(),
                Style::default()
                    .fg(POSITIVE_COLOR)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("    {} entries", income.rows.len()),
                Style::default().fg(HELP_COLOR),
            ),
        ]);

        frame.render_widget(
            Paragraph::new(line).block(titled_block(" INCOME ", "")),
            area,
        );
    }

    fn render_entries(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = titled_block(" ENTRIES ", "[a]dd [h/l] month [c]urrent [m] all");
        let rows = &state.view.income.rows;

        if rows.is_empty() {
            let paragraph = Paragraph::new(Line::styled(
                "No income recorded for this period. Press 'a' to add one.",
                Style::default().fg(HELP_COLOR),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let selected = state.income_state.selected_index;
        let visible_count = (area.height as usize).saturating_sub(2);
        let scroll_offset = calculate_centered_scroll(selected, rows.len(), visible_count);

        let items: Vec<ListItem> = rows
            .iter()
            .enumerate()
            .skip(scroll_offset)
            .take(visible_count)
            .map(|(idx, row)| {
                let line = Line::from(vec![
                    Span::styled(format!("[{}] ", row.date), Style::default().fg(HELP_COLOR)),
                    Span::raw(format!("{} ", row.description)),
                    Span::styled(row.amount_text.clone(), Style::default().fg(POSITIVE_COLOR)),
                ]);
                let item = ListItem::new(line);
                if idx == selected {
                    item.style(Style::default().bg(Color::DarkGray))
                } else {
                    item
                }
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Component for IncomeScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let total = state.view.income.rows.len();
        if handle_list_navigation(&key, &mut state.income_state.selected_index, total) {
            return EventResult::Handled;
        }
        if !key.no_modifiers() {
            return EventResult::NotHandled;
        }

        match &key.code {
            KeyCode::Char('h') | KeyCode::Char('[') | KeyCode::Left => {
                state.set_month_filter(state.month.previous());
            }
            KeyCode::Char('l') | KeyCode::Char(']') | KeyCode::Right => {
                state.set_month_filter(state.month.next());
            }
            KeyCode::Char('c') => state.set_month_filter(MonthFilter::current(today())),
            KeyCode::Char('m') => {
                let toggled = match state.month {
                    MonthFilter::All => MonthFilter::current(today()),
                    MonthFilter::Month(_) => MonthFilter::All,
                };
                state.set_month_filter(toggled);
            }
            KeyCode::Char('a') => state.open_modal(ModalAction::AddIncome),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.render_header(frame, chunks[0], state);
        self.render_entries(frame, chunks[1], state);
    }
}
