//! Task slot persistence contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole task list as one JSON value under a fixed
//!   namespaced key.
//! - Degrade missing or corrupt slot data to an empty list on load
//!   instead of surfacing an error.
//!
//! # Invariants
//! - `load` never fails: every failure path yields an empty list and a
//!   warn-level log event.
//! - A slot whose payload violates the unique-id list invariant counts
//!   as corrupt.

use crate::model::list::TaskList;
use crate::storage::StorageResult;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;

/// Fixed namespaced key of the persisted task list.
pub const TASKS_SLOT_KEY: &str = "zentask/tasks";

/// Persistence contract for the task list slot.
pub trait TaskStorage {
    /// Loads the persisted list; missing or corrupt data yields an
    /// empty list.
    fn load(&self) -> TaskList;

    /// Persists the full list, replacing the previous slot value.
    fn save(&self, list: &TaskList) -> StorageResult<()>;
}

/// SQLite-backed slot storage.
pub struct SqliteTaskStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskStorage<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskStorage for SqliteTaskStorage<'_> {
    fn load(&self) -> TaskList {
        let raw: Option<String> = match self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [TASKS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()
        {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=slot_load module=storage status=error key={TASKS_SLOT_KEY} error={err} fallback=empty"
                );
                return TaskList::default();
            }
        };

        let Some(raw) = raw else {
            debug!("event=slot_load module=storage status=empty key={TASKS_SLOT_KEY}");
            return TaskList::default();
        };

        match serde_json::from_str::<TaskList>(&raw) {
            Ok(list) if ids_unique(&list) => {
                debug!(
                    "event=slot_load module=storage status=ok key={TASKS_SLOT_KEY} count={}",
                    list.len()
                );
                list
            }
            Ok(_) => {
                warn!(
                    "event=slot_load module=storage status=corrupt key={TASKS_SLOT_KEY} reason=duplicate_ids fallback=empty"
                );
                TaskList::default()
            }
            Err(err) => {
                warn!(
                    "event=slot_load module=storage status=corrupt key={TASKS_SLOT_KEY} reason=bad_json error={err} fallback=empty"
                );
                TaskList::default()
            }
        }
    }

    fn save(&self, list: &TaskList) -> StorageResult<()> {
        let payload = serde_json::to_string(list)?;
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_SLOT_KEY, payload],
        )?;
        debug!(
            "event=slot_save module=storage status=ok key={TASKS_SLOT_KEY} count={}",
            list.len()
        );
        Ok(())
    }
}

fn ids_unique(list: &TaskList) -> bool {
    let mut seen = HashSet::with_capacity(list.len());
    list.tasks().iter().all(|task| seen.insert(task.id))
}
