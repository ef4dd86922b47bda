//! Signed-in actors driving board mutations.

use rstest::rstest;
use taskflow::board::{
    domain::{BoardId, ColumnId, TaskId, TaskPatch},
    services::{BoardServiceError, CreateBoardRequest, CreateTaskRequest},
};

use super::helpers::{App, app};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_in_user_builds_a_board(app: App) -> Result<(), eyre::Report> {
    let user = app.auth.login("jane@example.com", "password123").await?;
    let actor = app.auth.current_user().await?;
    eyre::ensure!(actor.as_ref() == Some(&user), "session restores the user");

    let board = app
        .boards
        .create_board(
            actor.as_ref(),
            CreateBoardRequest::new("Launch").with_description("Release checklist"),
        )
        .await?;
    eyre::ensure!(board.created_by() == user.id(), "creator is the actor");
    eyre::ensure!(board.columns().count() == 4, "four columns");

    let task = app
        .boards
        .create_task(
            actor.as_ref(),
            board.id(),
            CreateTaskRequest::new("Write changelog").in_column(ColumnId::Review),
        )
        .await?;
    eyre::ensure!(task.created_by() == user.id(), "task creator is the actor");

    let current = app
        .boards
        .current_board()
        .await?
        .ok_or_else(|| eyre::eyre!("new board is selected"))?;
    eyre::ensure!(
        current.column(ColumnId::Review).len() == 1,
        "current board reflects the new task"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn signed_out_user_cannot_create(app: App) -> Result<(), eyre::Report> {
    app.auth.login("john@example.com", "password123").await?;
    app.auth.logout().await?;
    let actor = app.auth.current_user().await?;

    let result = app
        .boards
        .create_board(actor.as_ref(), CreateBoardRequest::new("Nope"))
        .await;

    eyre::ensure!(
        matches!(result, Err(BoardServiceError::AuthenticationRequired(_))),
        "expected authentication error, got {result:?}"
    );
    let last = app
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("rejection notification"))?;
    eyre::ensure!(
        last.description() == "You need to be logged in to create a board",
        "unexpected notification: {last}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_update_relocates_task(app: App) -> Result<(), eyre::Report> {
    let board_id = BoardId::new("1");
    let task_id = TaskId::new("102");

    let updated = app
        .boards
        .update_task(
            &board_id,
            &task_id,
            TaskPatch::new().with_status(ColumnId::Done),
        )
        .await?;
    eyre::ensure!(updated.status() == ColumnId::Done, "status updated");

    let board = app
        .boards
        .find_board(&board_id)
        .await?
        .ok_or_else(|| eyre::eyre!("board exists"))?;
    eyre::ensure!(
        board.column(ColumnId::Done).tasks().iter().any(|t| t.id() == &task_id),
        "task lives in the done column"
    );
    eyre::ensure!(
        !board.column(ColumnId::Todo).tasks().iter().any(|t| t.id() == &task_id),
        "task left the todo column"
    );
    eyre::ensure!(board.summary().completion_percent() == 40, "two of five done");
    Ok(())
}
