//! Keyboard input handling for the TUI.
//!
//! Translates key events into category selection, list navigation and
//! overlay toggles.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use grocerycache_core::Category;

use crate::app::{App, AppState, PAGE_SCROLL_SIZE};

/// Handle a key press. Returns `true` when the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Any key closes the help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        app.state = AppState::Normal;
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.state = AppState::Quitting;
            return Ok(true);
        }
        KeyCode::Char('?') => app.state = AppState::ShowingHelp,

        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => {
            app.prev_category();
            app.remember_category();
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
            app.next_category();
            app.remember_category();
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(category) = category_for_digit(c) {
                app.select_category(category);
                app.remember_category();
            }
        }
        KeyCode::Char('r') => {
            app.reload();
        }

        KeyCode::Down | KeyCode::Char('j') => app.select_next(1),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(1),
        KeyCode::PageDown => app.select_next(PAGE_SCROLL_SIZE),
        KeyCode::PageUp => app.select_prev(PAGE_SCROLL_SIZE),
        KeyCode::Home => app.selection = 0,
        KeyCode::End => app.select_last(),
        _ => {}
    }

    Ok(false)
}

/// Map a 1-based digit key to a category
fn category_for_digit(c: char) -> Option<Category> {
    let index = c.to_digit(10)? as usize;
    Category::ALL.get(index.checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_for_digit() {
        assert_eq!(category_for_digit('1'), Some(Category::Coffee));
        assert_eq!(category_for_digit('6'), Some(Category::FreshProduce));
        assert_eq!(category_for_digit('7'), None);
        assert_eq!(category_for_digit('0'), None);
    }
}
