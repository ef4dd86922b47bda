//! Service layer for board and task management.

use mockable::Clock;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use super::{CreateBoardRequest, CreateTaskRequest};
use crate::auth::domain::User;
use crate::board::{
    domain::{
        Board, BoardDomainError, BoardId, BoardPatch, BoardSummary, ColumnId, Task, TaskId,
        TaskPatch,
    },
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::notify::{Notification, Notifier};

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// The operation needs a signed-in user.
    #[error("You need to be logged in to {0}")]
    AuthenticationRequired(&'static str),

    /// The board does not exist.
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),

    /// The task does not exist on the board.
    #[error("task {task} not found on board {board}")]
    TaskNotFound {
        /// Board searched.
        board: BoardId,
        /// Missing task.
        task: TaskId,
    },

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board and task orchestration service.
///
/// Every mutation is persisted through the repository before the
/// confirming notification is sent. Mutations hold a write gate from the
/// read of the board to the write back, so concurrent calls on one service
/// never overwrite each other.
pub struct BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    notifier: Arc<dyn Notifier>,
    current: Arc<RwLock<Option<BoardId>>>,
    write_gate: Arc<Mutex<()>>,
}

impl<R, C> Clone for BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
            notifier: Arc::clone(&self.notifier),
            current: Arc::clone(&self.current),
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}

impl<R, C> BoardService<R, C>
where
    R: BoardRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            repository,
            clock,
            notifier,
            current: Arc::new(RwLock::new(None)),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Returns every board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn list_boards(&self) -> BoardServiceResult<Vec<Board>> {
        Ok(self.repository.list().await?)
    }

    /// Returns every board with its progress summary.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn dashboard(&self) -> BoardServiceResult<Vec<(Board, BoardSummary)>> {
        let boards = self.repository.list().await?;
        Ok(boards
            .into_iter()
            .map(|board| {
                let summary = board.summary();
                (board, summary)
            })
            .collect())
    }

    /// Returns a board by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn find_board(&self, board_id: &BoardId) -> BoardServiceResult<Option<Board>> {
        Ok(self.repository.find_by_id(board_id).await?)
    }

    /// Selects the current board and returns it.
    ///
    /// An unknown id clears the selection and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn set_current_board(&self, board_id: &BoardId) -> BoardServiceResult<Option<Board>> {
        let board = self.repository.find_by_id(board_id).await?;
        self.select(board.as_ref().map(|found| found.id().clone()));
        Ok(board)
    }

    /// Returns the currently selected board as it is stored now.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Repository`] when loading fails.
    pub async fn current_board(&self) -> BoardServiceResult<Option<Board>> {
        let Some(board_id) = self.selected() else {
            return Ok(None);
        };
        Ok(self.repository.find_by_id(&board_id).await?)
    }

    /// Creates a board owned by `actor` and selects it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::AuthenticationRequired`] without an
    /// actor, [`BoardServiceError::Domain`] for an invalid title, or a
    /// repository error.
    pub async fn create_board(
        &self,
        actor: Option<&User>,
        request: CreateBoardRequest,
    ) -> BoardServiceResult<Board> {
        let owner = self.require_actor(actor, "create a board")?;
        let board = Board::new(request.title, request.description, owner.id(), &*self.clock)?;
        let _gate = self.write_gate.lock().await;
        self.repository.store(&board).await?;
        self.select(Some(board.id().clone()));

        info!(board_id = %board.id(), "board created");
        self.notifier.notify(Notification::new(
            "Board created",
            format!("\"{}\" has been created successfully", board.title()),
        ));
        Ok(board)
    }

    /// Applies a partial update to a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the board does not
    /// exist, or a repository error.
    pub async fn update_board(
        &self,
        board_id: &BoardId,
        patch: BoardPatch,
    ) -> BoardServiceResult<Board> {
        let _gate = self.write_gate.lock().await;
        let mut board = self.load_board(board_id).await?;
        board.apply(patch);
        self.repository.update(&board).await?;

        info!(board_id = %board_id, "board updated");
        self.notifier.notify(Notification::new(
            "Board updated",
            "Board has been updated successfully",
        ));
        Ok(board)
    }

    /// Deletes a board, clearing the selection when it was selected.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] when the board does not
    /// exist, or a repository error.
    pub async fn delete_board(&self, board_id: &BoardId) -> BoardServiceResult<()> {
        let _gate = self.write_gate.lock().await;
        self.repository.delete(board_id).await.map_err(|err| match err {
            BoardRepositoryError::NotFound(id) => BoardServiceError::BoardNotFound(id),
            other => BoardServiceError::Repository(other),
        })?;
        if self.selected().as_ref() == Some(board_id) {
            self.select(None);
        }

        info!(board_id = %board_id, "board deleted");
        self.notifier.notify(Notification::new(
            "Board deleted",
            "Board has been deleted successfully",
        ));
        Ok(())
    }

    /// Creates a task on a board, stamped with `actor` as creator.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::AuthenticationRequired`] without an
    /// actor, [`BoardServiceError::BoardNotFound`] for an unknown board,
    /// [`BoardServiceError::Domain`] for invalid input, or a repository error.
    pub async fn create_task(
        &self,
        actor: Option<&User>,
        board_id: &BoardId,
        request: CreateTaskRequest,
    ) -> BoardServiceResult<Task> {
        let creator = self.require_actor(actor, "create a task")?;
        let draft = request.into_draft()?;
        let _gate = self.write_gate.lock().await;
        let mut board = self.load_board(board_id).await?;
        let task = Task::from_draft(draft, creator.id().clone(), &*self.clock);
        board.add_task(task.clone())?;
        self.repository.update(&board).await?;

        info!(board_id = %board_id, task_id = %task.id(), "task created");
        self.notifier.notify(Notification::new(
            "Task created",
            format!("\"{}\" has been added to {}", task.title(), task.status()),
        ));
        Ok(task)
    }

    /// Returns a task and the column holding it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] or
    /// [`BoardServiceError::TaskNotFound`] when either is missing, or a
    /// repository error.
    pub async fn find_task(
        &self,
        board_id: &BoardId,
        task_id: &TaskId,
    ) -> BoardServiceResult<(Board, Task)> {
        let board = self.load_board(board_id).await?;
        let task = board
            .find_task(task_id)
            .map(|(_, task)| task.clone())
            .ok_or_else(|| BoardServiceError::TaskNotFound {
                board: board_id.clone(),
                task: task_id.clone(),
            })?;
        Ok((board, task))
    }

    /// Applies a partial update to a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] or
    /// [`BoardServiceError::TaskNotFound`] when either is missing, or a
    /// repository error.
    pub async fn update_task(
        &self,
        board_id: &BoardId,
        task_id: &TaskId,
        patch: TaskPatch,
    ) -> BoardServiceResult<Task> {
        let _gate = self.write_gate.lock().await;
        let mut board = self.load_board(board_id).await?;
        let task = board
            .update_task(task_id, patch)
            .map_err(|err| task_error(board_id, err))?;
        self.repository.update(&board).await?;

        info!(board_id = %board_id, task_id = %task_id, "task updated");
        self.notifier.notify(Notification::new(
            "Task updated",
            "Task has been updated successfully",
        ));
        Ok(task)
    }

    /// Deletes a task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] or
    /// [`BoardServiceError::TaskNotFound`] when either is missing, or a
    /// repository error.
    pub async fn delete_task(
        &self,
        board_id: &BoardId,
        task_id: &TaskId,
    ) -> BoardServiceResult<Task> {
        let _gate = self.write_gate.lock().await;
        let mut board = self.load_board(board_id).await?;
        let task = board
            .remove_task(task_id)
            .map_err(|err| task_error(board_id, err))?;
        self.repository.update(&board).await?;

        info!(board_id = %board_id, task_id = %task_id, "task deleted");
        self.notifier.notify(Notification::new(
            "Task deleted",
            format!("\"{}\" has been deleted", task.title()),
        ));
        Ok(task)
    }

    /// Moves a task between columns.
    ///
    /// Returns `Ok(None)` and leaves the board untouched when `source` and
    /// `destination` are the same column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::BoardNotFound`] for an unknown board,
    /// [`BoardServiceError::Domain`] when the task is not in `source`, or a
    /// repository error.
    pub async fn move_task(
        &self,
        board_id: &BoardId,
        task_id: &TaskId,
        source: ColumnId,
        destination: ColumnId,
    ) -> BoardServiceResult<Option<Task>> {
        if source == destination {
            return Ok(None);
        }
        let _gate = self.write_gate.lock().await;
        let mut board = self.load_board(board_id).await?;
        let Some(task) = board.move_task(task_id, source, destination)? else {
            return Ok(None);
        };
        self.repository.update(&board).await?;

        info!(
            board_id = %board_id,
            task_id = %task_id,
            from = %source,
            to = %destination,
            "task moved"
        );
        self.notifier.notify(Notification::new(
            "Task moved",
            format!("\"{}\" moved to {}", task.title(), destination.spoken()),
        ));
        Ok(Some(task))
    }

    async fn load_board(&self, board_id: &BoardId) -> BoardServiceResult<Board> {
        self.repository
            .find_by_id(board_id)
            .await?
            .ok_or_else(|| BoardServiceError::BoardNotFound(board_id.clone()))
    }

    fn require_actor<'a>(
        &self,
        actor: Option<&'a User>,
        action: &'static str,
    ) -> BoardServiceResult<&'a User> {
        actor.ok_or_else(|| {
            let err = BoardServiceError::AuthenticationRequired(action);
            warn!(action, "rejected unauthenticated request");
            self.notifier.notify(Notification::destructive(
                "Authentication required",
                err.to_string(),
            ));
            err
        })
    }

    fn selected(&self) -> Option<BoardId> {
        self.current.read().ok().and_then(|current| current.clone())
    }

    fn select(&self, board_id: Option<BoardId>) {
        if let Ok(mut current) = self.current.write() {
            *current = board_id;
        }
    }
}

fn task_error(board_id: &BoardId, err: BoardDomainError) -> BoardServiceError {
    match err {
        BoardDomainError::TaskNotFound(task) => BoardServiceError::TaskNotFound {
            board: board_id.clone(),
            task,
        },
        other => BoardServiceError::Domain(other),
    }
}
