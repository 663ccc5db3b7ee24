//! Board aggregate: ordered columns of tasks plus the task location index.

use super::{BoardDomainError, BoardLayout, ColumnId, Task, TaskId, TaskName, TaskPatch};
use std::collections::HashMap;

/// A column and its ordered tasks. Task order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    label: String,
    tasks: Vec<Task>,
}

impl Column {
    const fn empty(id: ColumnId, label: String) -> Self {
        Self {
            id,
            label,
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the index of the task within this column.
    #[must_use]
    pub fn position(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }
}

/// The full collection of columns and their tasks.
///
/// Every configured column is present, even when empty, and every task
/// identifier appears in exactly one column. The location index is derived
/// from the columns and is not part of equality.
#[derive(Debug, Clone)]
pub struct Board {
    columns: Vec<Column>,
    locations: HashMap<TaskId, ColumnId>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.columns == other.columns
    }
}

impl Eq for Board {}

impl Board {
    /// Creates the seed board: every configured column, no tasks.
    #[must_use]
    pub fn seed(layout: &BoardLayout) -> Self {
        let columns = layout
            .columns()
            .iter()
            .map(|spec| Column::empty(spec.id().clone(), spec.label().to_owned()))
            .collect();
        Self {
            columns,
            locations: HashMap::new(),
        }
    }

    /// Creates a board holding the given tasks per column.
    ///
    /// Columns not mentioned stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownColumn`] when a column is not part
    /// of the layout and [`BoardDomainError::DuplicateTask`] when a task
    /// identifier appears more than once.
    pub fn with_tasks(
        layout: &BoardLayout,
        contents: impl IntoIterator<Item = (ColumnId, Vec<Task>)>,
    ) -> Result<Self, BoardDomainError> {
        let mut board = Self::seed(layout);
        for (column_id, tasks) in contents {
            if !layout.contains(&column_id) {
                return Err(BoardDomainError::UnknownColumn(column_id));
            }
            for task in tasks {
                if board.locations.contains_key(task.id()) {
                    return Err(BoardDomainError::DuplicateTask(task.id().clone()));
                }
                board.push_task(&column_id, task)?;
            }
        }
        Ok(board)
    }

    /// Returns the columns in layout order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the column with the given identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| &column.id == column_id)
    }

    /// Returns the column that currently holds the task.
    #[must_use]
    pub fn column_of(&self, task_id: &TaskId) -> Option<&ColumnId> {
        self.locations.get(task_id)
    }

    /// Returns the column holding the task and the task's index within it.
    #[must_use]
    pub fn position(&self, task_id: &TaskId) -> Option<(&ColumnId, usize)> {
        let column_id = self.locations.get(task_id)?;
        let index = self.column(column_id)?.position(task_id)?;
        Some((column_id, index))
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        let column_id = self.locations.get(task_id)?;
        self.column(column_id)?
            .tasks
            .iter()
            .find(|task| task.id() == task_id)
    }

    /// Iterates over every task identifier, column by column.
    pub fn task_ids(&self) -> impl Iterator<Item = &TaskId> {
        self.columns
            .iter()
            .flat_map(|column| column.tasks.iter().map(Task::id))
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` when no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Creates a task and appends it to the first column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskName`] when the name is empty
    /// after trimming; the board is left unchanged.
    pub fn create_task(&mut self, name: &str) -> Result<Task, BoardDomainError> {
        let task = Task::new(TaskName::new(name)?);
        let default_column = self
            .columns
            .first()
            .map(|column| column.id.clone())
            .ok_or(BoardDomainError::EmptyLayout)?;
        self.push_task(&default_column, task.clone())?;
        Ok(task)
    }

    /// Applies a partial update to a task.
    ///
    /// A patch `status` naming a different column moves the task to the end
    /// of that column; naming the current column keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when no column holds the
    /// task, [`BoardDomainError::EmptyTaskName`] when the patch renames the
    /// task to an empty name, and [`BoardDomainError::UnknownColumn`] when
    /// the patch status is not a board column. The board is left unchanged
    /// on error.
    pub fn update_task(
        &mut self,
        task_id: &TaskId,
        patch: &TaskPatch,
    ) -> Result<Task, BoardDomainError> {
        let current_column = self
            .locations
            .get(task_id)
            .cloned()
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        if let Some(status) = patch.status()
            && self.column(status).is_none()
        {
            return Err(BoardDomainError::UnknownColumn(status.clone()));
        }
        let current = self
            .task(task_id)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))?;
        let updated = patch.apply_to(current)?;

        match patch.status() {
            Some(status) if status != &current_column => {
                self.take_task(task_id);
                self.push_task(status, updated.clone())?;
            }
            _ => self.replace_task(&current_column, updated.clone()),
        }
        Ok(updated)
    }

    /// Removes a task from whichever column holds it.
    ///
    /// Returns `None` without error when the task is not on the board.
    pub fn delete_task(&mut self, task_id: &TaskId) -> Option<Task> {
        self.take_task(task_id).map(|(_, _, task)| task)
    }

    /// Removes a task, returning its former column, index, and value.
    pub(crate) fn take_task(&mut self, task_id: &TaskId) -> Option<(ColumnId, usize, Task)> {
        let column_id = self.locations.remove(task_id)?;
        let column = self.column_mut(&column_id)?;
        let index = column.position(task_id)?;
        let task = column.tasks.remove(index);
        Some((column_id, index, task))
    }

    /// Inserts a task at `index`, clamped to the end of the column.
    pub(crate) fn insert_task(
        &mut self,
        column_id: &ColumnId,
        index: usize,
        task: Task,
    ) -> Result<(), BoardDomainError> {
        let task_id = task.id().clone();
        let column = self
            .column_mut(column_id)
            .ok_or_else(|| BoardDomainError::UnknownColumn(column_id.clone()))?;
        let clamped = index.min(column.tasks.len());
        column.tasks.insert(clamped, task);
        self.locations.insert(task_id, column_id.clone());
        Ok(())
    }

    fn push_task(&mut self, column_id: &ColumnId, task: Task) -> Result<(), BoardDomainError> {
        self.insert_task(column_id, usize::MAX, task)
    }

    fn replace_task(&mut self, column_id: &ColumnId, updated: Task) {
        if let Some(slot) = self
            .column_mut(column_id)
            .and_then(|column| column.tasks.iter_mut().find(|task| task.id() == updated.id()))
        {
            *slot = updated;
        }
    }

    fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| &column.id == column_id)
    }
}
