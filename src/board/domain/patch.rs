//! Partial task edits coming from the task-detail view.

use super::{BoardDomainError, ColumnId, Priority, RepeatFrequency, Task, TaskName};
use serde::Deserialize;

/// A partial update touching any subset of a task's editable fields.
///
/// An absent `status` keeps the task in its current column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskPatch {
    name: Option<String>,
    notes: Option<String>,
    repeat_frequency: Option<RepeatFrequency>,
    priority: Option<Priority>,
    status: Option<ColumnId>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Sets the new repeat frequency.
    #[must_use]
    pub const fn with_repeat_frequency(mut self, repeat_frequency: RepeatFrequency) -> Self {
        self.repeat_frequency = Some(repeat_frequency);
        self
    }

    /// Sets the new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the column the task should move to.
    #[must_use]
    pub fn with_status(mut self, status: ColumnId) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the target column, if the patch moves the task.
    #[must_use]
    pub const fn status(&self) -> Option<&ColumnId> {
        self.status.as_ref()
    }

    /// Returns a copy of `task` with the patched attribute fields applied.
    ///
    /// The `status` field is not an attribute of the task; the board applies
    /// it by relocating the task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when the patch renames the
    /// task to an empty name.
    pub fn apply_to(&self, task: &Task) -> Result<Task, BoardDomainError> {
        let mut updated = task.clone();
        if let Some(name) = &self.name {
            updated.rename(TaskName::new(name.as_str())?);
        }
        if let Some(notes) = &self.notes {
            updated.set_notes(notes.clone());
        }
        if let Some(repeat_frequency) = self.repeat_frequency {
            updated.set_repeat_frequency(repeat_frequency);
        }
        if let Some(priority) = self.priority {
            updated.set_priority(priority);
        }
        Ok(updated)
    }
}
