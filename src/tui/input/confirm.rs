use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, Mode};

/// Confirmation gate for destructive mutations. Only an explicit `y`
/// resolves affirmatively; anything that cancels performs no mutation.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let state = app.confirm_state.take();
            app.mode = Mode::Navigate;
            if let Some(state) = state {
                match state.action {
                    ConfirmAction::DeleteTask { id } => {
                        app.store.delete(&id);
                        app.status_message = Some("Deleted".to_string());
                    }
                    ConfirmAction::ClearCompleted => {
                        let removed = app.store.clear_completed();
                        app.status_message = Some(format!("Removed {} task(s)", removed));
                    }
                    ConfirmAction::ClearAll => {
                        app.store.clear_all();
                        app.status_message = Some("Storage cleared".to_string());
                    }
                }
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
