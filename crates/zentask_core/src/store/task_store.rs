//! Task store: authoritative snapshot plus persistence side effects.
//!
//! # Responsibility
//! - Own the current `TaskList` snapshot for the session.
//! - Apply commands via the pure list operations and persist every
//!   successful state transition before exposing it.
//!
//! # Invariants
//! - A snapshot observable through `tasks()` has already been handed
//!   to the storage collaborator.
//! - A save failure never rolls back the in-memory snapshot; it stays
//!   authoritative for the rest of the session.
//! - No-op commands (blank text, unknown id, clear on empty) perform
//!   no save.

use crate::capability::{Clock, IdGenerator};
use crate::model::list::TaskList;
use crate::model::task::TaskId;
use crate::storage::TaskStorage;
use log::{debug, error, info};

/// Authoritative task list store for one session.
///
/// The confirmation gate in front of `clear_all` belongs to the
/// rendering collaborator; once invoked here it is unconditional.
pub struct TaskStore<S: TaskStorage, G: IdGenerator, C: Clock> {
    storage: S,
    ids: G,
    clock: C,
    tasks: TaskList,
}

impl<S: TaskStorage, G: IdGenerator, C: Clock> TaskStore<S, G, C> {
    /// Opens a store session, loading the persisted list.
    ///
    /// Missing or corrupt slot data degrades to an empty list inside
    /// the storage collaborator, so this constructor cannot fail.
    pub fn open(storage: S, ids: G, clock: C) -> Self {
        let tasks = storage.load();
        info!(
            "event=store_load module=store status=ok count={}",
            tasks.len()
        );
        Self {
            storage,
            ids,
            clock,
            tasks,
        }
    }

    /// Current snapshot, newest first.
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Adds a task with freshly generated id and creation time.
    ///
    /// Blank or whitespace-only text is silently rejected and returns
    /// `None`; otherwise returns the new task's id.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("event=task_add module=store status=rejected reason=blank_text");
            return None;
        }

        let id = self.ids.next_id();
        let next = self.tasks.add(id, trimmed, self.clock.now_ms());
        self.commit(next, "task_add");
        Some(id)
    }

    /// Inverts the completion flag of one task.
    ///
    /// Unknown ids are an idempotent no-op; returns whether a task
    /// changed.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        if !self.tasks.contains(id) {
            debug!("event=task_toggle module=store status=ignored reason=unknown_id id={id}");
            return false;
        }

        let next = self.tasks.toggle(id);
        self.commit(next, "task_toggle");
        true
    }

    /// Removes one task, preserving the order of the rest.
    ///
    /// Unknown ids are an idempotent no-op; returns whether a task was
    /// removed.
    pub fn delete(&mut self, id: TaskId) -> bool {
        if !self.tasks.contains(id) {
            debug!("event=task_delete module=store status=ignored reason=unknown_id id={id}");
            return false;
        }

        let next = self.tasks.delete(id);
        self.commit(next, "task_delete");
        true
    }

    /// Replaces the list with an empty one, unconditionally.
    pub fn clear_all(&mut self) {
        if self.tasks.is_empty() {
            return;
        }

        let next = self.tasks.clear();
        self.commit(next, "clear_all");
    }

    fn commit(&mut self, next: TaskList, event: &str) {
        // Persist before the snapshot becomes observable. Write failure
        // is non-fatal: the next load simply won't see this mutation.
        match self.storage.save(&next) {
            Ok(()) => {
                debug!("event={event} module=store status=ok count={}", next.len());
            }
            Err(err) => {
                error!("event={event} module=store status=save_failed error={err}");
            }
        }
        self.tasks = next;
    }
}
