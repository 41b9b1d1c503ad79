use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Single-line editor for adding or retitling a task.
///
/// Enter commits through the store, which enforces the text rules: an
/// empty/whitespace buffer is a silent no-op, as is an unchanged title.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            close_editor(app);
        }
        (_, KeyCode::Enter) => {
            commit(app);
            close_editor(app);
        }

        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }

        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        (KeyModifiers::NONE, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        (KeyModifiers::NONE, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }

        // Ctrl-U: clear the line
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }

        _ => {}
    }
}

fn commit(app: &mut App) {
    match app.edit_target.clone() {
        Some(EditTarget::New) => {
            app.store.add(&app.edit_buffer);
        }
        Some(EditTarget::Retitle(id)) => {
            app.store.update_text(&id, &app.edit_buffer);
        }
        None => {}
    }
}

fn close_editor(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = None;
    app.mode = Mode::Navigate;
}
