//! Board layout configuration: the fixed, ordered set of columns.

use super::{BoardDomainError, ColumnId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A configured column and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    id: ColumnId,
    label: String,
}

impl ColumnSpec {
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
}

/// The fixed set of board columns, in display order.
///
/// New tasks land in the first column. Entering the terminal column counts
/// as completing a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BoardLayoutConfig")]
pub struct BoardLayout {
    columns: Vec<ColumnSpec>,
    default_column: ColumnId,
    terminal_column: ColumnId,
}

impl BoardLayout {
    /// Starts building a layout.
    #[must_use]
    pub fn builder() -> BoardLayoutBuilder {
        BoardLayoutBuilder::default()
    }

    /// Returns the configured columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Returns the column that receives newly created tasks.
    #[must_use]
    pub const fn default_column(&self) -> &ColumnId {
        &self.default_column
    }

    /// Returns the column that represents completed work.
    #[must_use]
    pub const fn terminal_column(&self) -> &ColumnId {
        &self.terminal_column
    }

    /// Returns `true` when the column is part of this layout.
    #[must_use]
    pub fn contains(&self, column: &ColumnId) -> bool {
        self.columns.iter().any(|spec| &spec.id == column)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        let column = |id: &'static str, label: &str| ColumnSpec {
            id: ColumnId::from_static(id),
            label: label.to_owned(),
        };
        Self {
            columns: vec![
                column("todo", "Todo"),
                column("inProgress", "In Progress"),
                column("done", "Done"),
            ],
            default_column: ColumnId::from_static("todo"),
            terminal_column: ColumnId::from_static("done"),
        }
    }
}

/// Builder for [`BoardLayout`].
#[derive(Debug, Clone, Default)]
pub struct BoardLayoutBuilder {
    columns: Vec<(String, String)>,
    terminal_column: Option<String>,
}

impl BoardLayoutBuilder {
    /// Appends a column. An empty label falls back to the identifier.
    #[must_use]
    pub fn column(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.columns.push((id.into(), label.into()));
        self
    }

    /// Sets the terminal column. Defaults to the last configured column.
    #[must_use]
    pub fn terminal(mut self, id: impl Into<String>) -> Self {
        self.terminal_column = Some(id.into());
        self
    }

    /// Validates and builds the layout.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyLayout`] when no column is configured,
    /// [`BoardDomainError::EmptyColumnId`] or
    /// [`BoardDomainError::DuplicateColumn`] for invalid column identifiers,
    /// and [`BoardDomainError::UnknownColumn`] when the terminal column is
    /// not configured.
    pub fn build(self) -> Result<BoardLayout, BoardDomainError> {
        let mut seen = HashSet::new();
        let mut columns = Vec::with_capacity(self.columns.len());
        for (raw_id, raw_label) in self.columns {
            let id = ColumnId::new(raw_id)?;
            if !seen.insert(id.clone()) {
                return Err(BoardDomainError::DuplicateColumn(id));
            }
            let trimmed_label = raw_label.trim();
            let label = if trimmed_label.is_empty() {
                id.as_str().to_owned()
            } else {
                trimmed_label.to_owned()
            };
            columns.push(ColumnSpec { id, label });
        }

        let default_column = columns
            .first()
            .map(|spec| spec.id.clone())
            .ok_or(BoardDomainError::EmptyLayout)?;
        let terminal_column = match self.terminal_column {
            Some(raw_terminal) => {
                let terminal = ColumnId::new(raw_terminal)?;
                if !seen.contains(&terminal) {
                    return Err(BoardDomainError::UnknownColumn(terminal));
                }
                terminal
            }
            None => columns
                .last()
                .map(|spec| spec.id.clone())
                .ok_or(BoardDomainError::EmptyLayout)?,
        };

        Ok(BoardLayout {
            columns,
            default_column,
            terminal_column,
        })
    }
}

/// Serialized layout configuration accepted from host configuration files.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardLayoutConfig {
    columns: Vec<ColumnConfig>,
    #[serde(default)]
    terminal_column: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ColumnConfig {
    id: String,
    #[serde(default)]
    label: String,
}

impl TryFrom<BoardLayoutConfig> for BoardLayout {
    type Error = BoardDomainError;

    fn try_from(config: BoardLayoutConfig) -> Result<Self, Self::Error> {
        let builder = config
            .columns
            .into_iter()
            .fold(Self::builder(), |builder, column| {
                builder.column(column.id, column.label)
            });
        config
            .terminal_column
            .into_iter()
            .fold(builder, BoardLayoutBuilder::terminal)
            .build()
    }
}
