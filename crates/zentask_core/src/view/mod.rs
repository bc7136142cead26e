//! Read-only derived views over the task list.

pub mod projection;
