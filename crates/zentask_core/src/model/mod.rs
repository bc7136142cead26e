//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record and the ordered task list.
//! - Keep list mutations copy-on-write so every state is an immutable
//!   snapshot.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Task ids are unique within one `TaskList`.

pub mod list;
pub mod task;
