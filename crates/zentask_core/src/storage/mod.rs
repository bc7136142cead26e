//! SQLite-backed slot storage bootstrap and contracts.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the task slot.
//! - Apply schema migrations in deterministic order.
//! - Define the `TaskStorage` persistence contract.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Core code must not read/write the slot before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
pub mod task_storage;

pub use open::{open_store, open_store_in_memory};
pub use task_storage::{SqliteTaskStorage, TaskStorage, TASKS_SLOT_KEY};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage bootstrap and write-path error.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "cannot serialize task slot: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
