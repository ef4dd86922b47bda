//! Error types for board domain validation and parsing.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating boards.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The board title is empty after trimming.
    #[error("board title must not be empty")]
    EmptyBoardTitle,

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// No task with the identifier exists on the board.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task exists but is not in the expected column.
    #[error("task {task} is not in column {column}")]
    TaskNotInColumn {
        /// Task being moved.
        task: TaskId,
        /// Column the task was expected in.
        column: ColumnId,
    },

    /// A task with the identifier already exists on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),
}

/// Error returned while parsing column identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}, expected one of todo, in-progress, review, done")]
pub struct ParseColumnIdError(pub String);
