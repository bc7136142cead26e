//! Ordered task list with copy-on-write operations.
//!
//! # Responsibility
//! - Own the newest-first ordering convention (new tasks prepended).
//! - Provide pure list operations: every mutation takes `&self` and
//!   returns a fresh `TaskList` snapshot.
//!
//! # Invariants
//! - Task ids are unique within the list.
//! - `toggle`/`delete` with an unknown id return the list unchanged.
//! - No operation reorders surviving tasks.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// The full ordered collection of tasks, the unit of persistence.
///
/// Serializes transparently as a JSON array of tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_vec(tasks: Vec<Task>) -> Self {
        Self(tasks)
    }

    /// Read-only view of the tasks, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether a task with `id` exists in the list.
    pub fn contains(&self, id: TaskId) -> bool {
        self.0.iter().any(|task| task.id == id)
    }

    /// Returns a new list with a task prepended.
    ///
    /// `text` is trimmed first; if nothing remains, the list is
    /// returned unchanged (silent no-op per the input contract).
    pub fn add(&self, id: TaskId, text: &str, created_at: i64) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return self.clone();
        }

        let mut tasks = Vec::with_capacity(self.0.len() + 1);
        tasks.push(Task::new(id, trimmed, created_at));
        tasks.extend(self.0.iter().cloned());
        Self(tasks)
    }

    /// Returns a new list with the matching task's `completed` flag
    /// inverted. Unknown ids are a no-op; order and all other fields
    /// are unchanged.
    pub fn toggle(&self, id: TaskId) -> Self {
        let tasks = self
            .0
            .iter()
            .map(|task| {
                if task.id == id {
                    let mut toggled = task.clone();
                    toggled.completed = !task.completed;
                    toggled
                } else {
                    task.clone()
                }
            })
            .collect();
        Self(tasks)
    }

    /// Returns a new list without the matching task, preserving the
    /// relative order of the rest. Unknown ids are a no-op.
    pub fn delete(&self, id: TaskId) -> Self {
        let tasks = self
            .0
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        Self(tasks)
    }

    /// Returns an empty list regardless of current contents.
    pub fn clear(&self) -> Self {
        Self::default()
    }
}
