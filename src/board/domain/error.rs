//! Error types for board domain validation and snapshot parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// A task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// A column identifier is empty after trimming.
    #[error("column identifier must not be empty")]
    EmptyColumnId,

    /// The column is not part of the configured board layout.
    #[error("unknown column: {0}")]
    UnknownColumn(ColumnId),

    /// No column holds a task with the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// A task identifier would appear more than once on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The board layout configures no columns.
    #[error("board layout must configure at least one column")]
    EmptyLayout,

    /// The board layout lists the same column twice.
    #[error("duplicate column in board layout: {0}")]
    DuplicateColumn(ColumnId),
}

/// Errors returned when a persisted snapshot does not match the board shape.
///
/// A snapshot that fails validation is rejected as a whole.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SnapshotValidationError {
    /// The snapshot bytes are not valid JSON.
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(String),

    /// The snapshot root is not an object keyed by column identifier.
    #[error("snapshot must be a JSON object keyed by column identifier")]
    NotAnObject,

    /// A configured column maps to something other than a task list.
    #[error("column {0} does not hold a task list")]
    ColumnNotAList(ColumnId),

    /// A task record is missing required fields or has mistyped fields.
    #[error("column {column} holds a malformed task record: {reason}")]
    MalformedTask {
        /// Column holding the record.
        column: ColumnId,
        /// Decoder diagnostic.
        reason: String,
    },

    /// A task record decoded but violates a domain rule.
    #[error("column {column} holds an invalid task: {source}")]
    InvalidTask {
        /// Column holding the record.
        column: ColumnId,
        /// Domain rule that was violated.
        source: BoardDomainError,
    },

    /// The decoded tasks do not form a consistent board.
    #[error(transparent)]
    Board(#[from] BoardDomainError),
}
