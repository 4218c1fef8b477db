//! List navigation shared by the screens.

use crate::event::{AppKeyEvent, KeyCode};

/// Scroll offset that keeps the selected item centered when possible.
pub fn calculate_centered_scroll(
    selected_idx: usize,
    total_items: usize,
    visible_count: usize,
) -> usize {
    if total_items <= visible_count {
        return 0;
    }

    let center = visible_count / 2;

    if selected_idx <= center {
        0
    } else if selected_idx >= total_items.saturating_sub(visible_count.saturating_sub(center)) {
        total_items.saturating_sub(visible_count)
    } else {
        selected_idx.saturating_sub(center)
    }
}

/// Handle j/k or Up/Down list navigation, wrapping at both ends.
///
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(key: &AppKeyEvent, selected: &mut usize, total: usize) -> bool {
    if total == 0 || !key.no_modifiers() {
        return false;
    }

    match &key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *selected = (*selected + 1) % total;
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *selected = if *selected == 0 {
                total - 1
            } else {
                *selected - 1
            };
            true
        }
        KeyCode::Home => {
            *selected = 0;
            true
        }
        KeyCode::End => {
            *selected = total - 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut selected = 0;
        assert!(handle_list_navigation(
            &AppKeyEvent::plain(KeyCode::Char('k')),
            &mut selected,
            3
        ));
        assert_eq!(selected, 2);
        handle_list_navigation(&AppKeyEvent::plain(KeyCode::Down), &mut selected, 3);
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_centered_scroll() {
        assert_eq!(calculate_centered_scroll(3, 5, 10), 0);
        assert_eq!(calculate_centered_scroll(2, 100, 10), 0);
        assert_eq!(calculate_centered_scroll(50, 100, 10), 45);
        assert_eq!(calculate_centered_scroll(99, 100, 10), 90);
    }

    #[test]
    fn test_empty_list_ignores_keys() {
        let mut selected = 0;
        assert!(!handle_list_navigation(
            &AppKeyEvent::plain(KeyCode::Char('j')),
            &mut selected,
            0
        ));
    }
}
