//! Core domain logic for ZenTask.
//! This crate is the single source of truth for task-list invariants.

pub mod capability;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;
pub mod view;

pub use capability::{Clock, IdGenerator, SystemClock, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::list::TaskList;
pub use model::task::{Filter, Task, TaskId};
pub use storage::{
    open_store, open_store_in_memory, SqliteTaskStorage, StorageError, StorageResult, TaskStorage,
    TASKS_SLOT_KEY,
};
pub use store::task_store::TaskStore;
pub use view::projection::{filtered, stats, TaskStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
