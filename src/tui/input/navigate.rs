use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, ConfirmState, EditTarget, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Movement
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => {
            if app.cursor + 1 < app.visible.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
            app.cursor = app.visible.len().saturating_sub(1);
        }

        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Enter) => {
            if let Some(id) = app.selected_id() {
                app.store.toggle_done(&id);
            }
        }

        // Add a new task
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.edit_buffer.clear();
            app.edit_cursor = 0;
            app.edit_target = Some(EditTarget::New);
            app.mode = Mode::Edit;
        }

        // Edit the selected task's text
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(task) = app.visible.get(app.cursor) {
                app.edit_buffer = task.text.clone();
                app.edit_cursor = app.edit_buffer.len();
                app.edit_target = Some(EditTarget::Retitle(task.id.clone()));
                app.mode = Mode::Edit;
            }
        }

        // Delete the selected task (gated)
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(task) = app.visible.get(app.cursor) {
                app.confirm_state = Some(ConfirmState {
                    action: ConfirmAction::DeleteTask {
                        id: task.id.clone(),
                    },
                    message: format!("Delete \"{}\"?", task.text),
                });
                app.mode = Mode::Confirm;
            }
        }

        // Due-date quick pick for the selected task
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            if let Some(id) = app.selected_id() {
                app.due_pick_id = Some(id);
                app.mode = Mode::DuePick;
            }
        }

        // Clear completed (gated; skip the prompt when nothing is completed)
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            let completed = app.store.completed();
            if completed == 0 {
                app.status_message = Some("No completed tasks".to_string());
            } else {
                app.confirm_state = Some(ConfirmState {
                    action: ConfirmAction::ClearCompleted,
                    message: format!("Remove {} completed task(s)?", completed),
                });
                app.mode = Mode::Confirm;
            }
        }

        // Clear everything (gated; skip the prompt when the list is empty)
        (KeyModifiers::SHIFT, KeyCode::Char('C')) => {
            if app.store.is_empty() {
                app.status_message = Some("Nothing to clear".to_string());
            } else {
                app.confirm_state = Some(ConfirmState {
                    action: ConfirmAction::ClearAll,
                    message: "Delete ALL tasks and purge storage?".to_string(),
                });
                app.mode = Mode::Confirm;
            }
        }

        // Filters
        (KeyModifiers::NONE, KeyCode::Char('f')) => {
            app.status_filter = app.status_filter.cycle();
        }
        (KeyModifiers::SHIFT, KeyCode::Char('F')) => {
            app.date_filter = app.date_filter.cycle();
        }

        // Search ('/' and '?' arrive shifted on some layouts)
        (_, KeyCode::Char('/')) => {
            app.search_input = app.applied_query.clone();
            app.mode = Mode::Search;
        }

        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Esc clears an active search
        (_, KeyCode::Esc) => {
            if !app.applied_query.is_empty() {
                app.search_input.clear();
                app.applied_query.clear();
                app.search_deadline = None;
            }
        }

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppConfig;
    use crate::store::{FileStorage, TaskStore};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn shift(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
    }

    fn test_app(dir: &TempDir) -> App {
        let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
        let store = TaskStore::open(storage);
        App::new(store, AppConfig::default())
    }

    #[test]
    fn space_toggles_the_selected_task() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("task").unwrap();
        app.refresh();

        handle_navigate(&mut app, key(KeyCode::Char(' ')));
        assert!(app.store.tasks()[0].done);
    }

    #[test]
    fn delete_routes_through_the_confirm_gate() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("task").unwrap();
        app.refresh();

        handle_navigate(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode, Mode::Confirm);
        // Nothing deleted until the gate resolves
        assert_eq!(app.store.tasks().len(), 1);
    }

    #[test]
    fn clear_completed_with_none_done_skips_the_prompt() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.store.add("task").unwrap();
        app.refresh();

        handle_navigate(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.confirm_state.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn clear_all_on_empty_list_skips_the_prompt() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        handle_navigate(&mut app, shift('C'));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.confirm_state.is_none());
    }

    #[test]
    fn slash_seeds_search_with_the_applied_query() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.applied_query = "milk".to_string();
        handle_navigate(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        assert_eq!(app.search_input, "milk");
    }

    #[test]
    fn esc_clears_an_active_search() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.applied_query = "milk".to_string();
        handle_navigate(&mut app, key(KeyCode::Esc));
        assert!(app.applied_query.is_empty());
    }
}
