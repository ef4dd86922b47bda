//! Board aggregate root.

use super::{BoardDomainError, BoardId, BoardSummary, Column, ColumnId, Task, TaskId, TaskPatch};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Board aggregate root.
///
/// Invariants:
/// - the four status columns are always present, in [`ColumnId::ALL`] order;
/// - each task's status equals the id of the column holding it;
/// - task identifiers are unique within the board.
///
/// Deserialization restores these invariants for snapshots written by other
/// tools: unknown layouts are folded into the canonical columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    id: BoardId,
    title: String,
    description: String,
    columns: Columns,
    members: Vec<UserId>,
    created_by: UserId,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBoardData {
    /// Persisted board identifier.
    pub id: BoardId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted tasks; each lands in the column named by its status.
    pub tasks: Vec<Task>,
    /// Persisted member ids.
    pub members: Vec<UserId>,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Partial update of a board. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardPatch {
    title: Option<String>,
    description: Option<String>,
    members: Option<Vec<UserId>>,
}

impl BoardPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardTitle`] when the title is blank.
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

    /// Replaces the member list.
    #[must_use]
    pub fn with_members(mut self, members: impl IntoIterator<Item = UserId>) -> Self {
        self.members = Some(members.into_iter().collect());
        self
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Board {
    /// Creates an empty board owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyBoardTitle`] when the title is blank.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        owner: &UserId,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self {
            id: BoardId::generate(),
            title: validated_title(title.into())?,
            description: description.into(),
            columns: Columns::default(),
            members: vec![owner.clone()],
            created_by: owner.clone(),
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a board from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBoardData) -> Self {
        let mut columns = Columns::default();
        for task in data.tasks {
            columns.insert_unique(task);
        }
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            columns,
            members: data.members,
            created_by: data.created_by,
            created_at: data.created_at,
        }
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> &BoardId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the member ids.
    #[must_use]
    pub fn members(&self) -> &[UserId] {
        &self.members
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

    /// Returns the column with the given id.
    #[must_use]
    pub const fn column(&self, id: ColumnId) -> &Column {
        self.columns.get(id)
    }

    /// Iterates over the columns in board order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        ColumnId::ALL.into_iter().map(|id| self.columns.get(id))
    }

    /// Iterates over every task, column by column.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.columns().flat_map(|column| column.tasks().iter())
    }

    /// Returns the task with `task_id` and the column holding it.
    #[must_use]
    pub fn find_task(&self, task_id: &TaskId) -> Option<(ColumnId, &Task)> {
        self.columns().find_map(|column| {
            column
                .tasks()
                .iter()
                .find(|task| task.id() == task_id)
                .map(|task| (column.id(), task))
        })
    }

    /// Returns task counts and the completion percentage.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        let total = self.columns().map(Column::len).sum();
        BoardSummary::new(total, self.column(ColumnId::Done).len())
    }

    /// Applies a partial update.
    pub fn apply(&mut self, patch: BoardPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(members) = patch.members {
            self.members = members;
        }
    }

    /// Appends a task to the column matching its status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateTask`] when a task with the same
    /// identifier is already on the board.
    pub fn add_task(&mut self, task: Task) -> Result<(), BoardDomainError> {
        if self.find_task(task.id()).is_some() {
            return Err(BoardDomainError::DuplicateTask(task.id().clone()));
        }
        self.columns.get_mut(task.status()).push(task);
        Ok(())
    }

    /// Applies a partial update to a task and returns the updated task.
    ///
    /// A status change moves the task to the end of the new column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task is not on the
    /// board.
    pub fn update_task(
        &mut self,
        task_id: &TaskId,
        patch: TaskPatch,
    ) -> Result<Task, BoardDomainError> {
        let not_found = || BoardDomainError::TaskNotFound(task_id.clone());
        let (current, index) = self.locate(task_id)?;
        let target = patch.status().unwrap_or(current);
        let column = self.columns.get_mut(current);

        if target == current {
            let task = column.get_mut(index).ok_or_else(not_found)?;
            task.apply(patch);
            return Ok(task.clone());
        }

        let mut task = column.take(index).ok_or_else(not_found)?;
        task.apply(patch);
        task.set_status(target);
        let updated = task.clone();
        self.columns.get_mut(target).push(task);
        Ok(updated)
    }

    /// Removes a task from the board and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotFound`] when the task is not on the
    /// board.
    pub fn remove_task(&mut self, task_id: &TaskId) -> Result<Task, BoardDomainError> {
        let (column, index) = self.locate(task_id)?;
        self.columns
            .get_mut(column)
            .take(index)
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))
    }

    /// Moves a task from `source` to the end of `destination` and returns
    /// the moved task.
    ///
    /// Returns `Ok(None)` without touching the board when `source` and
    /// `destination` are the same column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::TaskNotInColumn`] when the task is not in
    /// `source`.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        source: ColumnId,
        destination: ColumnId,
    ) -> Result<Option<Task>, BoardDomainError> {
        if source == destination {
            return Ok(None);
        }

        let not_in_source = || BoardDomainError::TaskNotInColumn {
            task: task_id.clone(),
            column: source,
        };
        let from = self.columns.get_mut(source);
        let index = from.position(task_id).ok_or_else(not_in_source)?;
        let mut task = from.take(index).ok_or_else(not_in_source)?;

        task.set_status(destination);
        let moved = task.clone();
        self.columns.get_mut(destination).push(task);
        Ok(Some(moved))
    }

    fn locate(&self, task_id: &TaskId) -> Result<(ColumnId, usize), BoardDomainError> {
        self.columns()
            .find_map(|column| column.position(task_id).map(|index| (column.id(), index)))
            .ok_or_else(|| BoardDomainError::TaskNotFound(task_id.clone()))
    }
}

fn validated_title(title: String) -> Result<String, BoardDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(BoardDomainError::EmptyBoardTitle);
    }
    Ok(trimmed.to_owned())
}

/// The four status columns, addressable without fallible lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Columns {
    todo: Column,
    in_progress: Column,
    review: Column,
    done: Column,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            todo: Column::empty(ColumnId::Todo),
            in_progress: Column::empty(ColumnId::InProgress),
            review: Column::empty(ColumnId::Review),
            done: Column::empty(ColumnId::Done),
        }
    }
}

impl Columns {
    const fn get(&self, id: ColumnId) -> &Column {
        match id {
            ColumnId::Todo => &self.todo,
            ColumnId::InProgress => &self.in_progress,
            ColumnId::Review => &self.review,
            ColumnId::Done => &self.done,
        }
    }

    const fn get_mut(&mut self, id: ColumnId) -> &mut Column {
        match id {
            ColumnId::Todo => &mut self.todo,
            ColumnId::InProgress => &mut self.in_progress,
            ColumnId::Review => &mut self.review,
            ColumnId::Done => &mut self.done,
        }
    }

    /// Places a task by its status, dropping repeats of an identifier.
    fn insert_unique(&mut self, task: Task) {
        let seen = ColumnId::ALL
            .into_iter()
            .any(|id| self.get(id).position(task.id()).is_some());
        if !seen {
            self.get_mut(task.status()).push(task);
        }
    }
}

/// Storage layout of a board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardRecord {
    id: BoardId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    columns: Vec<ColumnRecord>,
    #[serde(default)]
    members: Vec<UserId>,
    created_by: UserId,
    created_at: DateTime<Utc>,
}

/// Storage layout of a column.
///
/// Title and colour are written for readers of the raw snapshot but are
/// derived from the id on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ColumnRecord {
    id: ColumnId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    tasks: Vec<Task>,
}

impl From<BoardRecord> for Board {
    fn from(record: BoardRecord) -> Self {
        let mut tasks = Vec::new();
        for column in record.columns {
            tasks.extend(column.tasks.into_iter().map(|mut task| {
                task.set_status(column.id);
                task
            }));
        }
        Self::from_persisted(PersistedBoardData {
            id: record.id,
            title: record.title,
            description: record.description,
            tasks,
            members: record.members,
            created_by: record.created_by,
            created_at: record.created_at,
        })
    }
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        let Board {
            id,
            title,
            description,
            columns,
            members,
            created_by,
            created_at,
        } = board;
        let Columns {
            todo,
            in_progress,
            review,
            done,
        } = columns;
        let records = [todo, in_progress, review, done]
            .into_iter()
            .map(|column| ColumnRecord {
                id: column.id(),
                title: column.title().to_owned(),
                color: column.color().to_owned(),
                tasks: column.into_tasks(),
            })
            .collect();
        Self {
            id,
            title,
            description,
            columns: records,
            members,
            created_by,
            created_at,
        }
    }
}
