//! Persisted snapshot shape and its validation.
//!
//! A snapshot is a JSON object mapping each column identifier to an ordered
//! array of task records. Unknown keys are ignored and missing configured
//! columns are read as empty. Anything else that does not fit the shape
//! rejects the whole snapshot.

use super::{
    Board, BoardDomainError, BoardLayout, ColumnId, PersistedTaskData, Priority, RepeatFrequency,
    SnapshotValidationError, Task, TaskId, TaskName,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Serialized form of a single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Task identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Repeat frequency.
    #[serde(default)]
    pub repeat_frequency: RepeatFrequency,
    /// Priority.
    #[serde(default)]
    pub priority: Priority,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_owned(),
            name: task.name().as_str().to_owned(),
            notes: task.notes().to_owned(),
            repeat_frequency: task.repeat_frequency(),
            priority: task.priority(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = BoardDomainError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        Ok(Self::from_persisted(PersistedTaskData {
            id: TaskId::new(record.id)?,
            name: TaskName::new(record.name)?,
            notes: record.notes,
            repeat_frequency: record.repeat_frequency,
            priority: record.priority,
        }))
    }
}

/// Full-board snapshot, keyed by column identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    columns: BTreeMap<String, Vec<TaskRecord>>,
}

impl BoardSnapshot {
    /// Returns the task records of a column, if the snapshot lists it.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&[TaskRecord]> {
        self.columns.get(column_id.as_str()).map(Vec::as_slice)
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let columns = board
            .columns()
            .iter()
            .map(|column| {
                (
                    column.id().as_str().to_owned(),
                    column.tasks().iter().map(TaskRecord::from).collect(),
                )
            })
            .collect();
        Self { columns }
    }
}

/// Validates a decoded snapshot against the layout and builds the board.
///
/// # Errors
///
/// Returns [`SnapshotValidationError`] when the value is not an object, a
/// configured column does not hold an array of well-formed task records, or
/// a task identifier appears more than once.
pub fn validate_board_shape(
    raw: &Value,
    layout: &BoardLayout,
) -> Result<Board, SnapshotValidationError> {
    let object = raw.as_object().ok_or(SnapshotValidationError::NotAnObject)?;
    let mut contents = Vec::with_capacity(layout.columns().len());
    for spec in layout.columns() {
        let tasks = object
            .get(spec.id().as_str())
            .map_or_else(|| Ok(Vec::new()), |entry| decode_column(spec.id(), entry))?;
        contents.push((spec.id().clone(), tasks));
    }
    Ok(Board::with_tasks(layout, contents)?)
}

/// Decodes snapshot bytes and validates them against the layout.
///
/// # Errors
///
/// Returns [`SnapshotValidationError::Malformed`] when the bytes are not
/// JSON, and any error from [`validate_board_shape`].
pub fn decode_board(bytes: &[u8], layout: &BoardLayout) -> Result<Board, SnapshotValidationError> {
    let raw: Value = serde_json::from_slice(bytes)
        .map_err(|err| SnapshotValidationError::Malformed(err.to_string()))?;
    validate_board_shape(&raw, layout)
}

fn decode_column(column: &ColumnId, entry: &Value) -> Result<Vec<Task>, SnapshotValidationError> {
    if !entry.is_array() {
        return Err(SnapshotValidationError::ColumnNotAList(column.clone()));
    }
    let records =
        Vec::<TaskRecord>::deserialize(entry).map_err(|err| SnapshotValidationError::MalformedTask {
            column: column.clone(),
            reason: err.to_string(),
        })?;
    records
        .into_iter()
        .map(|record| {
            Task::try_from(record).map_err(|source| SnapshotValidationError::InvalidTask {
                column: column.clone(),
                source,
            })
        })
        .collect()
}
