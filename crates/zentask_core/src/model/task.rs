//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record persisted in the task slot.
//! - Define the session-only view filter selector.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty and trimmed once the task exists.
//! - `created_at` is assigned once at creation and never changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// View filter selector.
///
/// Session-only state owned by the rendering layer; it is never
/// persisted and any filter is reachable from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Show every task.
    #[default]
    All,
    /// Show tasks with `completed == false`.
    Active,
    /// Show tasks with `completed == true`.
    Completed,
}

impl Filter {
    /// Parses a filter name from user input.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// A single to-do entry.
///
/// Immutable value: mutations go through `TaskList`, which replaces the
/// record wholesale instead of editing it in place. Serialized field
/// names (`id`, `text`, `completed`, `createdAt`) are the external slot
/// schema and must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID, assigned at creation.
    pub id: TaskId,
    /// Trimmed, non-empty task text.
    pub text: String,
    /// Completion flag, starts `false`.
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Task {
    /// Creates a new task with `completed = false`.
    ///
    /// Callers are expected to pass already-trimmed, non-empty text;
    /// `TaskList::add` is the normalizing entry point.
    pub fn new(id: TaskId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }

    /// Returns whether this task still needs doing.
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
