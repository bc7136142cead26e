//! Injectable runtime capabilities.
//!
//! # Responsibility
//! - Abstract id generation and wall-clock time behind trait seams so
//!   the store stays deterministic under test.
//!
//! # Invariants
//! - `IdGenerator::next_id` never returns an id it has handed out
//!   before within one store session.

use crate::model::task::TaskId;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Source of fresh task ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> TaskId;
}

/// Source of `created_at` timestamps, Unix epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Production id source backed by random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TaskId {
        Uuid::new_v4()
    }
}

/// Production clock backed by system wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        // A clock before the epoch degrades to 0 rather than panicking;
        // timestamps only feed sorting and display.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}
