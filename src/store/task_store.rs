use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::model::task::Task;
use crate::store::storage::KeyValue;
use crate::store::writer::StoreWriter;

/// The single storage key holding the serialized task list.
pub const TASKS_KEY: &str = "TASKS";

/// Canonical task collection and its mutation operations.
///
/// All mutations are synchronous `&mut self` methods; persistence is a side
/// effect queued on a background writer after every effective change.
/// In-memory state is authoritative for the running session: a failed write
/// only risks losing the latest change on the next cold start.
///
/// `version` increments on every effective mutation so views can re-derive
/// lazily instead of subscribing to callbacks.
pub struct TaskStore {
    tasks: Vec<Task>,
    version: u64,
    writer: StoreWriter,
}

impl TaskStore {
    /// Load the persisted snapshot and start the persistence writer.
    ///
    /// A missing key, read error, or parse error is logged and treated as
    /// "no data" — startup never fails on a bad snapshot.
    pub fn open(storage: Arc<dyn KeyValue>) -> Self {
        let tasks = match storage.get(TASKS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Task>>(&json) {
                Ok(tasks) => tasks,
                Err(e) => {
                    log::warn!("discarding unreadable task snapshot: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("could not load tasks: {}", e);
                Vec::new()
            }
        };

        let writer = StoreWriter::spawn(storage);
        let store = TaskStore {
            tasks,
            version: 0,
            writer,
        };
        store.persist();
        store
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Count of not-done tasks in the full list (for the "items left" label)
    pub fn pending(&self) -> usize {
        self.tasks.iter().filter(|t| !t.done).count()
    }

    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Epoch-milliseconds id, bumped until unique within the list.
    /// Same-millisecond creations get consecutive ids.
    fn fresh_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = millis.to_string();
            if !self.tasks.iter().any(|t| t.id == id) {
                return id;
            }
            millis += 1;
        }
    }

    /// Add a task to the front of the list. Whitespace-only text is a no-op.
    /// Returns the new id on success.
    pub fn add(&mut self, text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.fresh_id();
        self.tasks.insert(0, Task::new(id.clone(), trimmed.to_string()));
        self.touch();
        Some(id)
    }

    /// Flip the completion flag. Unknown id is a no-op.
    pub fn toggle_done(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Replace the text if the trimmed value is non-empty and differs.
    pub fn update_text(&mut self, id: &str, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.text != trimmed => {
                task.text = trimmed.to_string();
                self.touch();
                true
            }
            _ => false,
        }
    }

    /// Set or clear the due date. Unknown id is a no-op.
    pub fn set_due_date(&mut self, id: &str, due_date: Option<NaiveDate>) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.due_date = due_date;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Remove the task. Unknown id is a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.touch();
            true
        } else {
            false
        }
    }

    /// Remove exactly the done tasks, preserving the order of the rest.
    /// Returns the number removed; zero means nothing changed (and callers
    /// should not have prompted).
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    /// Empty the list and purge the persisted snapshot.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.version += 1;
        self.writer.remove(TASKS_KEY);
    }

    /// Serialize the current list and queue the write. Fire-and-forget.
    pub fn persist(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(json) => self.writer.set(TASKS_KEY, json),
            Err(e) => log::error!("could not serialize tasks: {}", e),
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.persist();
    }
}
