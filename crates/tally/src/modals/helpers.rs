//! Drawing pieces shared by the form and alert modals.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use super::centered_rect;

// ========== Text Input ==========

/// Draw `text` with a block cursor on character `cursor`.
///
/// Past the end of the text the cursor is a trailing blank.
pub fn render_cursor_line(text: &str, cursor: usize) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

    let before: String = text.chars().take(cursor).collect();
    let mut rest = text.chars().skip(cursor);
    let at = rest.next().map_or_else(|| " ".to_string(), String::from);
    let after: String = rest.collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(at, cursor_style),
        Span::raw(after),
    ])
}

/// The part of an input that fits its box, with the cursor rebased onto it.
pub struct ScrolledView {
    pub display_value: String,
    /// In characters from the start of `display_value`
    pub cursor_pos: usize,
}

/// Slide a window of `max_width - 2` characters so the cursor stays in view.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let width = max_width.saturating_sub(2);
    let len = value.chars().count();
    if len <= width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let end = (cursor_pos.saturating_sub(width / 2) + width).min(len);
    let start = end.saturating_sub(width);
    ScrolledView {
        display_value: value.chars().skip(start).take(width).collect(),
        cursor_pos: cursor_pos.saturating_sub(start),
    }
}

// ========== Frame ==========

/// Rows inside a drawn modal frame, one per constraint
pub struct ModalFrame {
    pub chunks: Rc<[Rect]>,
}

/// Clear a centered area, border it with `title`, and split the inside.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let area = centered_rect(width, height, frame.area());
    let block = Block::bordered()
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "));
    let inner = block.inner(area);

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    ModalFrame {
        chunks: Layout::vertical(constraints.iter().copied()).split(inner),
    }
}

// ========== Key Hints ==========

/// One line of `[key] what-it-does` hints.
#[derive(Default)]
pub struct HelpText {
    spans: Vec<Span<'static>>,
}

impl HelpText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        if !self.spans.is_empty() {
            self.spans.push(Span::raw("  "));
        }
        self.spans.push(key.to_string().fg(color));
        self.spans.push(Span::raw(format!(" {desc}")));
        self
    }

    fn into_line(self) -> Line<'static> {
        Line::from(self.spans)
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.into_line())
    }
}

/// Several `HelpText` lines stacked in one paragraph.
#[derive(Default)]
pub struct MultiLineHelp {
    lines: Vec<Line<'static>>,
}

impl MultiLineHelp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, help: HelpText) -> Self {
        self.lines.push(help.into_line());
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.lines)
    }
}
