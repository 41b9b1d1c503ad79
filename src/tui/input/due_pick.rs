use chrono::Days;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Fixed quick-pick prompt for a task's due date:
/// today / tomorrow / clear / dismiss.
pub(super) fn handle_due_pick(app: &mut App, key: KeyEvent) {
    let id = match app.due_pick_id.clone() {
        Some(id) => id,
        None => {
            app.mode = Mode::Navigate;
            return;
        }
    };

    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('t')) => {
            app.store.set_due_date(&id, Some(app.today()));
            close(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('w')) => {
            let tomorrow = app.today().checked_add_days(Days::new(1));
            app.store.set_due_date(&id, tomorrow);
            close(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            app.store.set_due_date(&id, None);
            close(app);
        }
        (_, KeyCode::Esc) => {
            close(app);
        }
        _ => {}
    }
}

fn close(app: &mut App) {
    app.due_pick_id = None;
    app.mode = Mode::Navigate;
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

    fn test_app(dir: &TempDir) -> App {
        let storage = Arc::new(FileStorage::open(dir.path()).unwrap());
        let store = TaskStore::open(storage);
        App::new(store, AppConfig::default())
    }

    #[test]
    fn t_sets_todays_date() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let id = app.store.add("task").unwrap();
        app.due_pick_id = Some(id);
        app.mode = Mode::DuePick;

        handle_due_pick(&mut app, key(KeyCode::Char('t')));
        assert_eq!(app.store.tasks()[0].due_date, Some(app.today()));
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn w_sets_tomorrow() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let id = app.store.add("task").unwrap();
        app.due_pick_id = Some(id);

        handle_due_pick(&mut app, key(KeyCode::Char('w')));
        let expected = app.today().checked_add_days(Days::new(1));
        assert_eq!(app.store.tasks()[0].due_date, expected);
    }

    #[test]
    fn c_clears_and_esc_dismisses() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let id = app.store.add("task").unwrap();
        app.store.set_due_date(&id, Some(app.today()));

        app.due_pick_id = Some(id.clone());
        handle_due_pick(&mut app, key(KeyCode::Esc));
        assert_eq!(app.store.tasks()[0].due_date, Some(app.today()));

        app.due_pick_id = Some(id);
        handle_due_pick(&mut app, key(KeyCode::Char('c')));
        assert_eq!(app.store.tasks()[0].due_date, None);
    }
}
