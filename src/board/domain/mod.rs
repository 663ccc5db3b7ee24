//! Domain model for the Kanban board.
//!
//! The board domain owns the task and column model, the drag-move resolver,
//! task lifecycle mutations, completion detection, and the persisted
//! snapshot shape. Infrastructure concerns stay outside this boundary.

mod board;
mod completion;
mod drag;
mod error;
mod ids;
mod layout;
mod patch;
mod snapshot;
mod task;

pub use board::{Board, Column};
pub use completion::{TaskCompleted, newly_completed};
pub use drag::{
    DragEnd, DragEndPayload, DragIgnoredReason, DragOutcome, DragResolution, DropPosition, resolve,
};
pub use error::{BoardDomainError, SnapshotValidationError};
pub use ids::{ColumnId, TaskId};
pub use layout::{BoardLayout, BoardLayoutBuilder, ColumnSpec};
pub use patch::TaskPatch;
pub use snapshot::{BoardSnapshot, TaskRecord, decode_board, validate_board_shape};
pub use task::{PersistedTaskData, Priority, RepeatFrequency, RepeatPeriod, Task, TaskName};
