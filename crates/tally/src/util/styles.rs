//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use tally_core::Tone;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for gains and income
pub const POSITIVE_COLOR: Color = Color::Green;

/// Standard color for losses
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Bordered block with a title and, when given, bottom help text.
///
/// # Example
/// ```ignore
/// let block = titled_block(" Income ", "[a]dd [h/l] month");
/// ```
pub fn titled_block(title: &str, help_text: &str) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());

    if !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }

    block
}

/// Green for gains (zero included), red for losses.
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Gain => POSITIVE_COLOR,
        Tone::Loss => NEGATIVE_COLOR,
    }
}

pub fn tone_style(tone: Tone) -> Style {
    Style::default().fg(tone_color(tone))
}

pub fn header_style() -> Style {
    Style::default()
        .fg(HEADER_COLOR)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_color() {
        assert_eq!(tone_color(Tone::Gain), POSITIVE_COLOR);
        assert_eq!(tone_color(Tone::Loss), NEGATIVE_COLOR);
    }

    #[test]
    fn test_titled_block_has_title() {
        let block = titled_block("Income", "");
        assert!(format!("{:?}", block).contains("Income"));
    }
}
