//! Raw request payloads validated by the board service.

use crate::auth::domain::UserId;
use crate::board::domain::{BoardDomainError, ColumnId, Labels, TaskDraft};
use chrono::{DateTime, Utc};

/// Request payload for creating a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBoardRequest {
    pub(super) title: String,
    pub(super) description: String,
}

impl CreateBoardRequest {
    /// Creates a request with a title and an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Sets the board description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    column: ColumnId,
    assignee_id: Option<UserId>,
    due_date: Option<DateTime<Utc>>,
    labels: Vec<String>,
}

impl CreateTaskRequest {
    /// Creates a request for a task in the `todo` column.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            column: ColumnId::Todo,
            assignee_id: None,
            due_date: None,
            labels: Vec::new(),
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the column the task is created in.
    #[must_use]
    pub const fn in_column(mut self, column: ColumnId) -> Self {
        self.column = column;
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the labels; blanks and repeats are dropped.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    pub(super) fn into_draft(self) -> Result<TaskDraft, BoardDomainError> {
        let mut draft = TaskDraft::new(self.title)?
            .with_description(self.description)
            .with_status(self.column)
            .with_labels(self.labels.into_iter().collect::<Labels>());
        if let Some(assignee_id) = self.assignee_id {
            draft = draft.with_assignee(assignee_id);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        Ok(draft)
    }
}
