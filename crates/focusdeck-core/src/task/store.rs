//! Task collection CRUD over the key/value store.
//!
//! Every operation reads the full collection, applies the change, and
//! writes the full collection back; there are no partial updates and no
//! protection against concurrent writers. Malformed persisted data reads
//! as an empty collection.

use chrono::Local;

use super::{Task, TaskFilter};
use crate::error::Result;
use crate::storage::JsonStore;

/// Key the task collection is stored under.
pub const TASKS_KEY: &str = "focus_tasks";

/// Canonical owner of the task collection.
pub struct TaskStore {
    store: JsonStore,
}

impl TaskStore {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The full collection. Absent or malformed data yields an empty list.
    pub fn list(&self) -> Vec<Task> {
        self.store
            .get(TASKS_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Tasks passing `filter`, evaluated against today's local date.
    pub fn list_filtered(&self, filter: TaskFilter) -> Vec<Task> {
        let today = Local::now().date_naive();
        self.list()
            .into_iter()
            .filter(|task| filter.matches(task, today))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<Task> {
        self.list().into_iter().find(|task| task.id == id)
    }

    pub fn add(&self, task: Task) -> Result<()> {
        let mut tasks = self.list();
        tasks.push(task);
        self.save(&tasks)
    }

    /// Replace the record sharing `task.id`. No-op if the id is absent.
    pub fn update(&self, task: &Task) -> Result<()> {
        let mut tasks = self.list();
        if let Some(slot) = tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task.clone();
            self.save(&tasks)?;
        }
        Ok(())
    }

    /// Remove the record with `id`. No-op if absent.
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut tasks = self.list();
        let len = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() != len {
            self.save(&tasks)?;
        }
        Ok(())
    }

    /// Credit one pomodoro outside a timer session.
    ///
    /// Returns the updated task, or `None` when the id does not resolve.
    pub fn record_pomodoro(&self, id: &str) -> Result<Option<Task>> {
        let Some(mut task) = self.get(id) else {
            return Ok(None);
        };
        task.credit_pomodoro();
        self.update(&task)?;
        Ok(Some(task))
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        self.store.set(TASKS_KEY, serde_json::to_value(tasks)?)
    }
}
