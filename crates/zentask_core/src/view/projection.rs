//! View projection: filtered subsequence and summary counts.
//!
//! # Responsibility
//! - Derive what the rendering layer shows from (list, filter), as
//!   pure functions with no access to store or storage state.
//!
//! # Invariants
//! - `filtered` preserves source order (newest first).
//! - `stats(list).active + stats(list).completed == stats(list).total`.

use crate::model::list::TaskList;
use crate::model::task::Filter;

/// Summary counts over the full (unfiltered) list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Returns the subsequence of `list` matching `filter`, order
/// preserved. `Filter::All` returns the list unchanged.
pub fn filtered(list: &TaskList, filter: Filter) -> TaskList {
    match filter {
        Filter::All => list.clone(),
        Filter::Active => TaskList::from_vec(
            list.tasks()
                .iter()
                .filter(|task| task.is_active())
                .cloned()
                .collect(),
        ),
        Filter::Completed => TaskList::from_vec(
            list.tasks()
                .iter()
                .filter(|task| task.completed)
                .cloned()
                .collect(),
        ),
    }
}

/// Returns summary counts for the full list.
pub fn stats(list: &TaskList) -> TaskStats {
    let total = list.len();
    let completed = list.tasks().iter().filter(|task| task.completed).count();
    TaskStats {
        total,
        active: total - completed,
        completed,
    }
}
