use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Search-as-you-type with a debounce: every keystroke resets the pending
/// timer and only a timer that runs out (or Enter) applies the query.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Apply immediately and go back to the list
        (_, KeyCode::Enter) => {
            app.apply_search_now();
            app.mode = Mode::Navigate;
        }
        // Cancel: discard the typed query and the pending timer
        (_, KeyCode::Esc) => {
            app.search_input = app.applied_query.clone();
            app.search_deadline = None;
            app.mode = Mode::Navigate;
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            app.search_input.pop();
            app.bump_search_deadline();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.search_input.clear();
            app.bump_search_deadline();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.bump_search_deadline();
        }
        _ => {}
    }
}
