//! Task record, creation draft, and partial update.

use super::{BoardDomainError, ColumnId, Labels, TaskId};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: ColumnId,
    assignee_id: Option<UserId>,
    created_by: UserId,
    created_at: DateTime<Utc>,
    due_date: Option<DateTime<Utc>>,
    labels: Labels,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: ColumnId,
    /// Persisted assignee, if any.
    pub assignee_id: Option<UserId>,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted labels.
    pub labels: Labels,
}

impl Task {
    /// Creates a task from a validated draft.
    ///
    /// The task receives a fresh identifier and is stamped with `created_by`
    /// and the current clock time.
    #[must_use]
    pub fn from_draft(draft: TaskDraft, created_by: UserId, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::generate(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            assignee_id: draft.assignee_id,
            created_by,
            created_at: clock.utc(),
            due_date: draft.due_date,
            labels: draft.labels,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            assignee_id: data.assignee_id,
            created_by: data.created_by,
            created_at: data.created_at,
            due_date: data.due_date,
            labels: data.labels,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, possibly empty.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the status, which is also the id of the containing column.
    #[must_use]
    pub const fn status(&self) -> ColumnId {
        self.status
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<&UserId> {
        self.assignee_id.as_ref()
    }

    /// Returns the creator.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the labels.
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Returns `true` when the due date has passed and the task is not done.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != ColumnId::Done && self.due_date.is_some_and(|due| due < now)
    }

    pub(super) const fn set_status(&mut self, status: ColumnId) {
        self.status = status;
    }

    /// Applies the non-status fields of `patch`.
    pub(super) fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(assignee_id) = patch.assignee_id {
            self.assignee_id = assignee_id;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        if let Some(labels) = patch.labels {
            self.labels = labels;
        }
    }
}

/// Validated input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    status: ColumnId,
    assignee_id: Option<UserId>,
    due_date: Option<DateTime<Utc>>,
    labels: Labels,
}

impl TaskDraft {
    /// Creates a draft in the `todo` column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, BoardDomainError> {
        Ok(Self {
            title: validated_title(title.into())?,
            description: String::new(),
            status: ColumnId::Todo,
            assignee_id: None,
            due_date: None,
            labels: Labels::new(),
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the starting column.
    #[must_use]
    pub const fn with_status(mut self, status: ColumnId) -> Self {
        self.status = status;
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

    /// Sets the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = labels.into();
        self
    }

    /// Returns the starting column.
    #[must_use]
    pub const fn status(&self) -> ColumnId {
        self.status
    }
}

/// Partial update of a task. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    status: Option<ColumnId>,
    assignee_id: Option<Option<UserId>>,
    due_date: Option<Option<DateTime<Utc>>>,
    labels: Option<Labels>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTaskTitle`] when the title is blank.
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, BoardDomainError> {
        self.title = Some(validated_title(title.into())?);
        Ok(self)
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Changes the status, relocating the task to that column.
    #[must_use]
    pub const fn with_status(mut self, status: ColumnId) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets or clears the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee_id: Option<UserId>) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets or clears the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Replaces the labels.
    #[must_use]
    pub fn with_labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    /// Returns the requested status change, if any.
    #[must_use]
    pub const fn status(&self) -> Option<ColumnId> {
        self.status
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn validated_title(title: String) -> Result<String, BoardDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyTaskTitle);
    }
    Ok(trimmed.to_owned())
}
