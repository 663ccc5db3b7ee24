//! Task entity and its editable attributes.

use super::{BoardDomainError, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task urgency shown on the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Default priority.
    #[default]
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

/// Calendar unit of a repeating task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatPeriod {
    /// The task does not repeat.
    #[default]
    Never,
    /// Repeats every `n` days.
    Day,
    /// Repeats every `n` weeks.
    Week,
    /// Repeats every `n` months.
    Month,
    /// Repeats every `n` years.
    Year,
}

/// How often a task recurs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RepeatFrequency {
    /// Number of periods between repetitions.
    pub number: u32,
    /// Unit of the repetition interval.
    pub period: RepeatPeriod,
}

impl RepeatFrequency {
    /// Creates a repeat frequency.
    #[must_use]
    pub const fn new(number: u32, period: RepeatPeriod) -> Self {
        Self { number, period }
    }
}

/// Display name of a task, never empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when the name is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(BoardDomainError::EmptyTaskName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    notes: String,
    repeat_frequency: RepeatFrequency,
    priority: Priority,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted display name.
    pub name: TaskName,
    /// Persisted free-text notes.
    pub notes: String,
    /// Persisted repeat frequency.
    pub repeat_frequency: RepeatFrequency,
    /// Persisted priority.
    pub priority: Priority,
}

impl Task {
    /// Creates a task with a fresh identifier and default attributes.
    #[must_use]
    pub fn new(name: TaskName) -> Self {
        Self {
            id: TaskId::generate(),
            name,
            notes: String::new(),
            repeat_frequency: RepeatFrequency::default(),
            priority: Priority::default(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            notes: data.notes,
            repeat_frequency: data.repeat_frequency,
            priority: data.priority,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the repeat frequency.
    #[must_use]
    pub const fn repeat_frequency(&self) -> RepeatFrequency {
        self.repeat_frequency
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn rename(&mut self, name: TaskName) {
        self.name = name;
    }

    pub(crate) fn set_notes(&mut self, notes: String) {
        self.notes = notes;
    }

    pub(crate) const fn set_repeat_frequency(&mut self, repeat_frequency: RepeatFrequency) {
        self.repeat_frequency = repeat_frequency;
    }

    pub(crate) const fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
}
