//! Persistence and mutation of the task list

use chrono::Utc;
use tracing::warn;

use crate::store::{LocalStore, StoreResult};

use super::types::{Task, TaskId};

/// Store key holding the task list document
pub const TASKS_KEY: &str = "tasks";

/// Task list bound to a local store.
///
/// Persisted state is the source of truth: every operation reloads the
/// list, mutates it, and saves the whole document back. There is no
/// long-lived in-memory copy.
#[derive(Debug, Clone)]
pub struct TaskBook {
    store: LocalStore,
}

impl TaskBook {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Load the current list. An absent document is an empty list; a
    /// malformed one is treated as empty after a warning, and the next
    /// save replaces it.
    pub fn load(&self) -> StoreResult<Vec<Task>> {
        let Some(raw) = self.store.get(TASKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(%err, "stored task list is not valid JSON, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replace the persisted list with `tasks`
    pub fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let raw = serde_json::to_string(tasks)?;
        self.store.put(TASKS_KEY, &raw)
    }

    /// Append a task with the trimmed `text`; blank text is a no-op
    pub fn add(&self, text: &str) -> StoreResult<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut tasks = self.load()?;
        let task = Task::new(next_id(&tasks), text);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(Some(task))
    }

    /// Flip the completed flag on the task with `id`.
    ///
    /// Unknown ids (a view gone stale against the store) are a no-op
    /// returning `None`.
    pub fn toggle(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let mut tasks = self.load()?;
        let Some(task) = tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.completed = !task.completed;
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(Some(updated))
    }

    /// Remove the task with `id`; unknown ids are a no-op returning `None`
    pub fn remove(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let mut tasks = self.load()?;
        let Some(position) = tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };
        let removed = tasks.remove(position);
        self.save(&tasks)?;
        Ok(Some(removed))
    }
}

/// Creation-time id: current Unix milliseconds, bumped past the largest
/// existing id so additions in the same millisecond stay distinct
fn next_id(tasks: &[Task]) -> TaskId {
    let now = Utc::now().timestamp_millis();
    let max_existing = tasks.iter().map(|task| task.id).max().unwrap_or(0);
    now.max(max_existing + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_book() -> (TempDir, TaskBook) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(dir.path()).unwrap();
        (dir, TaskBook::new(store))
    }

    #[test]
    fn test_load_without_document_is_empty() {
        let (_dir, book) = temp_book();
        assert!(book.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_appends_one_open_task() {
        let (_dir, book) = temp_book();

        let task = book.add("water the plants").unwrap().unwrap();
        assert_eq!(task.text, "water the plants");
        assert!(!task.completed);

        let tasks = book.load().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], task);
    }

    #[test]
    fn test_add_trims_text() {
        let (_dir, book) = temp_book();
        let task = book.add("  tidy desk  ").unwrap().unwrap();
        assert_eq!(task.text, "tidy desk");
    }

    #[test]
    fn test_add_blank_text_is_rejected() {
        let (_dir, book) = temp_book();

        assert!(book.add("").unwrap().is_none());
        assert!(book.add("   ").unwrap().is_none());
        assert!(book.load().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_flips_exactly_one_task() {
        let (_dir, book) = temp_book();
        let first = book.add("first").unwrap().unwrap();
        let second = book.add("second").unwrap().unwrap();
        let third = book.add("third").unwrap().unwrap();

        let updated = book.toggle(second.id).unwrap().unwrap();
        assert!(updated.completed);

        let tasks = book.load().unwrap();
        let flags: Vec<bool> = tasks.iter().map(|t| t.completed).collect();
        assert_eq!(flags, vec![false, true, false]);

        let order: Vec<TaskId> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(order, vec![first.id, second.id, third.id]);
    }

    #[test]
    fn test_toggle_twice_restores_open_state() {
        let (_dir, book) = temp_book();
        let task = book.add("flip me").unwrap().unwrap();

        book.toggle(task.id).unwrap();
        let restored = book.toggle(task.id).unwrap().unwrap();
        assert!(!restored.completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (_dir, book) = temp_book();
        book.add("only").unwrap();

        assert!(book.toggle(999).unwrap().is_none());
        assert_eq!(book.load().unwrap().len(), 1);
        assert!(!book.load().unwrap()[0].completed);
    }

    #[test]
    fn test_remove_deletes_the_right_task() {
        let (_dir, book) = temp_book();
        let first = book.add("first").unwrap().unwrap();
        let second = book.add("second").unwrap().unwrap();
        let third = book.add("third").unwrap().unwrap();

        let removed = book.remove(second.id).unwrap().unwrap();
        assert_eq!(removed.text, "second");

        let remaining: Vec<TaskId> = book.load().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![first.id, third.id]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (_dir, book) = temp_book();
        book.add("keep me").unwrap();

        assert!(book.remove(12345).unwrap().is_none());
        assert_eq!(book.load().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_document_loads_as_empty() {
        let (_dir, book) = temp_book();
        book.store.put(TASKS_KEY, "{this is not json").unwrap();

        assert!(book.load().unwrap().is_empty());
    }

    #[test]
    fn test_ids_stay_unique_under_rapid_adds() {
        let (_dir, book) = temp_book();
        for i in 0..20 {
            book.add(&format!("task {}", i)).unwrap();
        }

        let mut ids: Vec<TaskId> = book.load().unwrap().iter().map(|t| t.id).collect();
        let count = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), count);

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
