use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction};
use crate::util::styles::{HELP_COLOR, POSITIVE_COLOR, header_style, titled_block, tone_style};

/// Number of income rows shown on the overview
const RECENT_INCOME_ROWS: usize = 5;

pub struct OverviewScreen;

impl OverviewScreen {
    fn render_asset_card(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let income = &state.view.income;
        let investments = &state.view.investments;

        let label = |text: &str| Span::styled(format!("{:<18}", text), header_style());

        let lines = vec![
            Line::from(vec![
                label(&format!("Income ({})", income.filter.label())),
                Span::styled(
                    income.month_total_text.clone(),
                    Style::default()
                        .fg(POSITIVE_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                label("Total principal"),
                Span::raw(investments.total_principal_text.clone()),
            ]),
            Line::from(vec![
                label("Total return"),
                Span::styled(
                    investments.total_return_text.clone(),
                    tone_style(investments.total_return_tone).add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let card = Paragraph::new(lines).block(titled_block(" ASSETS ", ""));
        frame.render_widget(card, area);
    }

    fn render_recent_income(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = titled_block(
            &format!(" INCOME · {} ", state.view.income.filter.label()),
            "[i] add income",
        );

        if state.view.income.rows.is_empty() {
            let paragraph = Paragraph::new(Line::styled(
                "No income recorded for this period",
                Style::default().fg(HELP_COLOR),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = state
            .view
            .income
            .rows
            .iter()
            .take(RECENT_INCOME_ROWS)
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("[{}] ", row.date), Style::default().fg(HELP_COLOR)),
                    Span::raw(format!("{} ", row.description)),
                    Span::styled(row.amount_text.clone(), Style::default().fg(POSITIVE_COLOR)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }

    fn render_positions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = titled_block(" INVESTMENTS ", "[n] add  [r] record return");

        if state.view.investments.rows.is_empty() {
            let paragraph = Paragraph::new(Line::styled(
                "No investments yet",
                Style::default().fg(HELP_COLOR),
            ))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = state
            .view
            .investments
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", row.name)),
                    Span::raw(format!("{} ", row.principal_text)),
                    Span::styled(row.return_text.clone(), tone_style(row.tone)),
                ]))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

impl Component for OverviewScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        let action = if key.is_char('i') {
            ModalAction::AddIncome
        } else if key.is_char('n') {
            ModalAction::AddInvestment
        } else if key.is_char('r') {
            ModalAction::RecordReturn
        } else {
            return EventResult::NotHandled;
        };

        state.open_modal(action);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        self.render_asset_card(frame, rows[0], state);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        self.render_recent_income(frame, columns[0], state);
        self.render_positions(frame, columns[1], state);
    }
}
