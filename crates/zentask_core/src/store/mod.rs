//! Store orchestration layer.
//!
//! # Responsibility
//! - Thread commands from the rendering layer through the pure list
//!   operations and the persistence collaborator.
//! - Keep rendering decoupled from storage details.

pub mod task_store;
