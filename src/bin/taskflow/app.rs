//! Wires the services onto a snapshot store and runs one command.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use taskflow::auth::{
    adapters::{InMemoryUserDirectory, SnapshotSessionStore},
    domain::{AuthDomainError, UserId},
    services::{AuthService, AuthServiceError, SignupRequest},
};
use taskflow::board::{
    adapters::SnapshotBoardRepository,
    domain::{BoardDomainError, BoardId, BoardPatch, TaskId, TaskPatch},
    services::{BoardService, BoardServiceError, CreateBoardRequest, CreateTaskRequest},
};
use taskflow::notify::Notifier;
use taskflow::render::{RenderError, Renderer};
use taskflow::storage::SnapshotStore;
use thiserror::Error;

use crate::cli::{
    BoardCommand, Command, CreateTaskArgs, TaskCommand, TaskRef, UpdateTaskArgs, end_of_day,
};

/// Errors surfaced by a command.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error(transparent)]
    Auth(#[from] AuthServiceError),

    /// The mock user directory could not be built.
    #[error(transparent)]
    Directory(#[from] AuthDomainError),

    /// A board operation failed.
    #[error(transparent)]
    Board(#[from] BoardServiceError),

    /// Command input failed validation.
    #[error(transparent)]
    Input(#[from] BoardDomainError),

    /// A view failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The due date has no end-of-day timestamp.
    #[error("invalid due date: {0}")]
    InvalidDueDate(NaiveDate),
}

/// Result type for commands.
pub type AppResult<T> = Result<T, AppError>;

/// The command-line application over a snapshot store.
pub struct App<S: SnapshotStore> {
    auth: AuthService<InMemoryUserDirectory, SnapshotSessionStore<S>>,
    boards: BoardService<SnapshotBoardRepository<S>, DefaultClock>,
    clock: DefaultClock,
    renderer: Renderer,
}

impl<S: SnapshotStore> App<S> {
    /// Builds the services over `store`, reporting through `notifier`.
    ///
    /// # Errors
    ///
    /// Returns an error when the user directory or templates fail to build.
    pub fn new(store: Arc<S>, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        let auth = AuthService::new(
            Arc::new(InMemoryUserDirectory::seeded()?),
            Arc::new(SnapshotSessionStore::new(Arc::clone(&store))),
            Arc::clone(&notifier),
        );
        let boards = BoardService::new(
            Arc::new(SnapshotBoardRepository::new(store)),
            Arc::new(DefaultClock),
            notifier,
        );
        Ok(Self {
            auth,
            boards,
            clock: DefaultClock,
            renderer: Renderer::new()?,
        })
    }

    /// Runs `command` and returns the text to print.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the command fails.
    pub async fn run(&self, command: Command) -> AppResult<String> {
        match command {
            Command::Login { email, password } => {
                let user = self.auth.login(&email, &password).await?;
                Ok(self.renderer.user(&user)?)
            }
            Command::Signup {
                email,
                password,
                name,
            } => {
                let user = self
                    .auth
                    .signup(SignupRequest::new(email, password, name))
                    .await?;
                Ok(self.renderer.user(&user)?)
            }
            Command::Logout => {
                self.auth.logout().await?;
                Ok("Signed out\n".to_owned())
            }
            Command::Whoami => match self.auth.restore().await? {
                Some(user) => Ok(self.renderer.user(&user)?),
                None => Ok("Not signed in\n".to_owned()),
            },
            Command::Dashboard => {
                let user = self.auth.restore().await?;
                let boards = self.boards.dashboard().await?;
                Ok(self.renderer.dashboard(user.as_ref(), &boards)?)
            }
            Command::Board(board) => self.run_board(board).await,
            Command::Task(task) => self.run_task(task).await,
        }
    }

    async fn run_board(&self, command: BoardCommand) -> AppResult<String> {
        match command {
            BoardCommand::Create { title, description } => {
                let actor = self.auth.restore().await?;
                let mut request = CreateBoardRequest::new(title);
                if let Some(text) = description {
                    request = request.with_description(text);
                }
                let board = self.boards.create_board(actor.as_ref(), request).await?;
                self.show_board(board.id()).await
            }
            BoardCommand::Show { board } => self.show_board(&BoardId::new(board)).await,
            BoardCommand::Update {
                board,
                title,
                description,
            } => {
                let board_id = BoardId::new(board);
                let mut patch = BoardPatch::new();
                if let Some(text) = title {
                    patch = patch.with_title(text)?;
                }
                if let Some(text) = description {
                    patch = patch.with_description(text);
                }
                self.boards.update_board(&board_id, patch).await?;
                self.show_board(&board_id).await
            }
            BoardCommand::Delete { board } => {
                let board_id = BoardId::new(board);
                self.boards.delete_board(&board_id).await?;
                Ok(format!("Deleted board {board_id}\n"))
            }
        }
    }

    async fn run_task(&self, command: TaskCommand) -> AppResult<String> {
        match command {
            TaskCommand::Create(args) => {
                let actor = self.auth.restore().await?;
                let board_id = BoardId::new(args.board.clone());
                let request = create_request(args)?;
                let task = self
                    .boards
                    .create_task(actor.as_ref(), &board_id, request)
                    .await?;
                self.show_task(&board_id, task.id()).await
            }
            TaskCommand::Show(TaskRef { board, task }) => {
                self.show_task(&BoardId::new(board), &TaskId::new(task))
                    .await
            }
            TaskCommand::Update(args) => {
                let board_id = BoardId::new(args.task.board.clone());
                let task_id = TaskId::new(args.task.task.clone());
                let patch = update_patch(args)?;
                self.boards.update_task(&board_id, &task_id, patch).await?;
                self.show_task(&board_id, &task_id).await
            }
            TaskCommand::Delete(TaskRef { board, task }) => {
                let board_id = BoardId::new(board);
                let removed = self
                    .boards
                    .delete_task(&board_id, &TaskId::new(task))
                    .await?;
                Ok(format!("Deleted task {} from board {board_id}\n", removed.id()))
            }
            TaskCommand::Move { task, from, to } => {
                let board_id = BoardId::new(task.board);
                self.boards
                    .move_task(&board_id, &TaskId::new(task.task), from, to)
                    .await?;
                self.show_board(&board_id).await
            }
        }
    }

    async fn show_board(&self, board_id: &BoardId) -> AppResult<String> {
        let board = self
            .boards
            .set_current_board(board_id)
            .await?
            .ok_or_else(|| BoardServiceError::BoardNotFound(board_id.clone()))?;
        Ok(self.renderer.board(&board, self.clock.utc())?)
    }

    async fn show_task(&self, board_id: &BoardId, task_id: &TaskId) -> AppResult<String> {
        let (board, task) = self.boards.find_task(board_id, task_id).await?;
        Ok(self.renderer.task(&board, &task, self.clock.utc())?)
    }
}

fn create_request(args: CreateTaskArgs) -> AppResult<CreateTaskRequest> {
    let mut request = CreateTaskRequest::new(args.title)
        .in_column(args.status)
        .with_labels(args.labels);
    if let Some(text) = args.description {
        request = request.with_description(text);
    }
    if let Some(assignee) = args.assignee {
        request = request.with_assignee(UserId::new(assignee));
    }
    if let Some(date) = args.due {
        let due = end_of_day(date).ok_or(AppError::InvalidDueDate(date))?;
        request = request.with_due_date(due);
    }
    Ok(request)
}

fn update_patch(args: UpdateTaskArgs) -> AppResult<TaskPatch> {
    let mut patch = TaskPatch::new();
    if let Some(text) = args.title {
        patch = patch.with_title(text)?;
    }
    if let Some(text) = args.description {
        patch = patch.with_description(text);
    }
    if let Some(status) = args.status {
        patch = patch.with_status(status);
    }
    if args.unassign {
        patch = patch.with_assignee(None);
    } else if let Some(assignee) = args.assignee {
        patch = patch.with_assignee(Some(UserId::new(assignee)));
    }
    if args.clear_due {
        patch = patch.with_due_date(None);
    } else if let Some(date) = args.due {
        let due = end_of_day(date).ok_or(AppError::InvalidDueDate(date))?;
        patch = patch.with_due_date(Some(due));
    }
    if !args.labels.is_empty() {
        patch = patch.with_labels(args.labels);
    }
    Ok(patch)
}
