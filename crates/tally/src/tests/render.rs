use ratatui::{Terminal, backend::TestBackend};

use super::{app_with, press, seeded_storage};
use crate::app::App;
use crate::event::KeyCode;
use crate::platform::memory::MemoryStorage;
use crate::state::today;

/// Draw one frame and return the screen as lines of text
fn render(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_overview_shows_totals() {
    let mut app = app_with(&seeded_storage(today()));
    let screen = render(&mut app, 100, 30);

    assert!(screen.contains("Overview"));
    assert!(screen.contains("Investments"));
    assert!(screen.contains("¥5000.00"));
    assert!(screen.contains("¥1000.00"));
    assert!(screen.contains("¥-50.00"));
    assert!(screen.contains("Salary"));
    assert!(screen.contains("Fund A"));
}

#[test]
fn test_empty_ledger_screens() {
    let mut app = app_with(&MemoryStorage::new());
    assert!(render(&mut app, 100, 30).contains("No investments yet"));

    press(&mut app, KeyCode::Char('2'));
    assert!(render(&mut app, 100, 30).contains("No income recorded for this period"));

    press(&mut app, KeyCode::Char('3'));
    assert!(render(&mut app, 100, 30).contains("Press 'a' to open one"));
}

#[test]
fn test_investments_table() {
    let mut app = app_with(&seeded_storage(today()));
    press(&mut app, KeyCode::Char('3'));
    let screen = render(&mut app, 100, 30);

    assert!(screen.contains("Principal"));
    assert!(screen.contains("Fund A"));
    assert!(screen.contains("-50.00"));
    assert!(screen.contains(&today().to_string()));
}

#[test]
fn test_form_and_alert_render_over_screen() {
    let mut app = app_with(&MemoryStorage::new());
    press(&mut app, KeyCode::Char('n'));
    let screen = render(&mut app, 100, 40);
    assert!(screen.contains("Add Investment"));
    assert!(screen.contains("+ New investment..."));

    press(&mut app, KeyCode::F(10));
    let screen = render(&mut app, 100, 40);
    assert!(screen.contains("Invalid input"));
    assert!(screen.contains("Add Investment"));
}

#[test]
fn test_storage_error_in_status_bar() {
    let mut app = app_with(&MemoryStorage::with_blob("not json"));
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Error: Failed to load ledger"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = app_with(&seeded_storage(today()));
    render(&mut app, 20, 6);
    press(&mut app, KeyCode::Char('i'));
    render(&mut app, 20, 6);
    press(&mut app, KeyCode::F(10));
    render(&mut app, 20, 6);
}
