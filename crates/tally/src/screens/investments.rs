use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Row, Table, TableState},
};

use crate::components::lists::handle_list_navigation;
use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction};
use crate::util::styles::{HELP_COLOR, header_style, titled_block, tone_style};

pub struct InvestmentsScreen;

impl InvestmentsScreen {
    fn render_positions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = titled_block(" POSITIONS ", "[a]dd / top up  [r]ecord return");
        let rows = &state.view.investments.rows;

        if rows.is_empty() {
            let paragraph = Paragraph::new(Line::styled(
                "No investments yet. Press 'a' to open one.",
                Style::default().fg(HELP_COLOR),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let header = Row::new(["Name", "Principal", "Return", "Updated"]).style(header_style());
        let table_rows = rows.iter().map(|row| {
            Row::new(vec![
                Line::raw(row.name.clone()),
                Line::raw(row.principal_text.clone()),
                Line::styled(row.return_text.clone(), tone_style(row.tone)),
                Line::styled(row.last_update.to_string(), Style::default().fg(HELP_COLOR)),
            ])
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Min(16),
                Constraint::Length(16),
                Constraint::Length(14),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(Color::DarkGray));

        let mut table_state =
            TableState::default().with_selected(Some(state.investments_state.selected_index));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn render_totals(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let totals = &state.view.investments;
        let line = Line::from(vec![
            Span::styled("Total principal: ", header_style()),
            Span::raw(totals.total_principal_text.clone()),
            Span::raw("    "),
            Span::styled("Total return: ", header_style()),
            Span::styled(
                totals.total_return_text.clone(),
                tone_style(totals.total_return_tone).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(titled_block(" TOTALS ", "")), area);
    }
}

impl Component for InvestmentsScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let total = state.view.investments.rows.len();
        if handle_list_navigation(&key, &mut state.investments_state.selected_index, total) {
            return EventResult::Handled;
        }

        if key.is_char('a') {
            state.open_modal(ModalAction::AddInvestment);
        } else if key.is_char('r') {
            state.open_modal(ModalAction::RecordReturn);
        } else {
            return EventResult::NotHandled;
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        self.render_positions(frame, chunks[0], state);
        self.render_totals(frame, chunks[1], state);
    }
}
