//! Completion detection over board transitions.

use super::{Board, ColumnId, Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Transient signal that a task has just entered the terminal column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompleted {
    task_id: TaskId,
    column: ColumnId,
    completed_at: DateTime<Utc>,
}

impl TaskCompleted {
    /// Creates a completion signal stamped with the current clock time.
    #[must_use]
    pub fn new(task_id: TaskId, column: ColumnId, clock: &impl Clock) -> Self {
        Self {
            task_id,
            column,
            completed_at: clock.utc(),
        }
    }

    /// Returns the completed task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the terminal column the task entered.
    #[must_use]
    pub const fn column(&self) -> &ColumnId {
        &self.column
    }

    /// Returns when the transition was observed.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}

/// Returns the tasks that sit in `terminal` on `next` but sat in another
/// column on `previous`, in terminal-column order.
///
/// Reorders inside the terminal column, deletions, and tasks absent from
/// `previous` yield nothing.
#[must_use]
pub fn newly_completed(previous: &Board, next: &Board, terminal: &ColumnId) -> Vec<TaskId> {
    next.column(terminal)
        .map(|column| {
            column
                .tasks()
                .iter()
                .map(Task::id)
                .filter(|task_id| {
                    previous
                        .column_of(task_id)
                        .is_some_and(|former| former != terminal)
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}
