//! Drag-move resolution.
//!
//! The gesture layer reports a completed drag once, naming the dragged task,
//! its origin column, the destination column, and optionally the task that
//! occupies the drop position. [`resolve`] turns that descriptor into the
//! next board: an in-place reorder or a cross-column move. Drags that do not
//! resolve to a valid change leave the board untouched and report why.

use super::{Board, BoardDomainError, ColumnId, TaskId};
use serde::Deserialize;

/// Raw drag-end event as emitted by the gesture layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEndPayload {
    /// Identifier of the dragged task.
    pub active_task_id: String,
    /// Column the drag started in.
    pub source_column_id: String,
    /// Column the task was dropped on.
    pub target_column_id: String,
    /// Task occupying the drop position; absent means "drop at end".
    #[serde(default)]
    pub target_anchor_id: Option<String>,
}

/// Where the dragged task lands in the target column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropPosition {
    /// Append to the end of the column.
    End,
    /// Take the place of the anchor task.
    Before(TaskId),
}

/// A validated drag-end descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    active: TaskId,
    source: ColumnId,
    target: ColumnId,
    position: DropPosition,
}

impl DragEnd {
    /// Creates a drag-end descriptor.
    #[must_use]
    pub const fn new(
        active: TaskId,
        source: ColumnId,
        target: ColumnId,
        position: DropPosition,
    ) -> Self {
        Self {
            active,
            source,
            target,
            position,
        }
    }

    /// Narrows a raw payload into a typed descriptor.
    ///
    /// A blank anchor is treated as "drop at end".
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskId`] or
    /// [`BoardDomainError::EmptyColumnId`] when a required identifier is
    /// blank.
    pub fn from_payload(payload: DragEndPayload) -> Result<Self, BoardDomainError> {
        let position = match payload.target_anchor_id {
            Some(anchor) if !anchor.trim().is_empty() => DropPosition::Before(TaskId::new(anchor)?),
            _ => DropPosition::End,
        };
        Ok(Self {
            active: TaskId::new(payload.active_task_id)?,
            source: ColumnId::new(payload.source_column_id)?,
            target: ColumnId::new(payload.target_column_id)?,
            position,
        })
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn active(&self) -> &TaskId {
        &self.active
    }

    /// Returns the origin column.
    #[must_use]
    pub const fn source(&self) -> &ColumnId {
        &self.source
    }

    /// Returns the destination column.
    #[must_use]
    pub const fn target(&self) -> &ColumnId {
        &self.target
    }

    /// Returns the drop position within the destination column.
    #[must_use]
    pub const fn position(&self) -> &DropPosition {
        &self.position
    }
}

/// Why a drag left the board unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragIgnoredReason {
    /// The task was dropped onto itself.
    SelfDrop,
    /// The drop position is the task's current position.
    AlreadyInPlace,
    /// The dragged task is not in the reported source column.
    TaskNotInSource,
    /// The source or target column is not on the board.
    UnknownColumn(ColumnId),
}

/// Result of resolving a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// The task moved within its column.
    Reordered {
        /// Dragged task.
        task: TaskId,
        /// Column holding the task.
        column: ColumnId,
        /// Index before the move.
        from_index: usize,
        /// Index after the move.
        to_index: usize,
    },
    /// The task moved to another column.
    Moved {
        /// Dragged task.
        task: TaskId,
        /// Origin column.
        from: ColumnId,
        /// Destination column.
        to: ColumnId,
        /// Index in the destination column.
        index: usize,
    },
    /// The drag resolved to no change.
    Ignored(DragIgnoredReason),
}

impl DragOutcome {
    /// Returns `true` when the board changed.
    #[must_use]
    pub const fn is_change(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// The next board together with what happened to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResolution {
    /// Board after the drag; equal to the input when ignored.
    pub board: Board,
    /// What the drag did.
    pub outcome: DragOutcome,
}

impl DragResolution {
    fn ignored(board: &Board, reason: DragIgnoredReason) -> Self {
        Self {
            board: board.clone(),
            outcome: DragOutcome::Ignored(reason),
        }
    }
}

/// Computes the board that results from a completed drag.
///
/// Within one column the task is removed and reinserted at the index its
/// anchor occupies. Across columns it is removed from the source and
/// inserted before the anchor in the target. A missing or unknown anchor
/// sends the task to the end of the target column. Invalid descriptors
/// return the input board with [`DragOutcome::Ignored`].
#[must_use]
pub fn resolve(board: &Board, drag: &DragEnd) -> DragResolution {
    let Some(source) = board.column(&drag.source) else {
        return DragResolution::ignored(
            board,
            DragIgnoredReason::UnknownColumn(drag.source.clone()),
        );
    };
    let Some(target) = board.column(&drag.target) else {
        return DragResolution::ignored(
            board,
            DragIgnoredReason::UnknownColumn(drag.target.clone()),
        );
    };
    let Some(from_index) = source.position(&drag.active) else {
        return DragResolution::ignored(board, DragIgnoredReason::TaskNotInSource);
    };
    let anchor = match &drag.position {
        DropPosition::Before(anchor) if anchor == &drag.active => {
            return DragResolution::ignored(board, DragIgnoredReason::SelfDrop);
        }
        DropPosition::Before(anchor) => Some(anchor),
        DropPosition::End => None,
    };
    let anchor_index = anchor.and_then(|anchor_id| target.position(anchor_id));

    if drag.source == drag.target {
        let last_index = source.len().saturating_sub(1);
        let to_index = anchor_index.unwrap_or(last_index);
        if to_index == from_index {
            return DragResolution::ignored(board, DragIgnoredReason::AlreadyInPlace);
        }
        return relocate(board, drag, to_index).map_or_else(
            || DragResolution::ignored(board, DragIgnoredReason::TaskNotInSource),
            |next| DragResolution {
                board: next,
                outcome: DragOutcome::Reordered {
                    task: drag.active.clone(),
                    column: drag.source.clone(),
                    from_index,
                    to_index,
                },
            },
        );
    }

    let index = anchor_index.unwrap_or_else(|| target.len());
    relocate(board, drag, index).map_or_else(
        || DragResolution::ignored(board, DragIgnoredReason::TaskNotInSource),
        |next| DragResolution {
            board: next,
            outcome: DragOutcome::Moved {
                task: drag.active.clone(),
                from: drag.source.clone(),
                to: drag.target.clone(),
                index,
            },
        },
    )
}

/// Removes the dragged task and reinserts it at `index` of the target.
fn relocate(board: &Board, drag: &DragEnd, index: usize) -> Option<Board> {
    let mut next = board.clone();
    let (_, _, task) = next.take_task(&drag.active)?;
    next.insert_task(&drag.target, index, task).ok()?;
    Some(next)
}
