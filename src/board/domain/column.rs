//! Status columns.

use super::{ParseColumnIdError, Task};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the four fixed status columns.
///
/// A task's status is the identifier of the column holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    /// Work not yet started.
    Todo,
    /// Work underway.
    InProgress,
    /// Work awaiting review.
    Review,
    /// Finished work.
    Done,
}

impl ColumnId {
    /// All columns in board order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the column accent colour.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Todo => "#8B5CF6",
            Self::InProgress => "#0EA5E9",
            Self::Review => "#F59E0B",
            Self::Done => "#10B981",
        }
    }

    /// Returns the identifier with dashes replaced by spaces.
    #[must_use]
    pub fn spoken(self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl TryFrom<&str> for ColumnId {
    type Error = ParseColumnIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnIdError(value.to_owned())),
        }
    }
}

impl std::str::FromStr for ColumnId {
    type Err = ParseColumnIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status column and its ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub const fn empty(id: ColumnId) -> Self {
        Self {
            id,
            tasks: Vec::new(),
        }
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the column heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.id.title()
    }

    /// Returns the column accent colour.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.id.color()
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub(super) fn position(&self, task_id: &super::TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == task_id)
    }

    pub(super) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(super) fn take(&mut self, index: usize) -> Option<Task> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub(super) fn get_mut(&mut self, index: usize) -> Option<&mut Task> {
        self.tasks.get_mut(index)
    }

    pub(super) fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }
}
