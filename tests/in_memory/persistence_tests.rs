//! Snapshot contents after service operations.

use rstest::rstest;
use taskflow::board::domain::{BoardId, ColumnId, TaskId};
use taskflow::storage::{BOARDS_KEY, SnapshotStore};

use super::helpers::{App, app};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_load_writes_starter_boards(app: App) -> Result<(), eyre::Report> {
    eyre::ensure!(app.store.is_empty(), "store starts empty");

    let dashboard = app.boards.dashboard().await?;

    let titles: Vec<_> = dashboard.iter().map(|(board, _)| board.title()).collect();
    eyre::ensure!(
        titles == ["Product Development", "Marketing Campaign"],
        "unexpected boards: {titles:?}"
    );
    let percents: Vec<_> = dashboard
        .iter()
        .map(|(_, summary)| summary.completion_percent())
        .collect();
    eyre::ensure!(percents == [20, 0], "unexpected progress: {percents:?}");
    eyre::ensure!(
        app.store.get(BOARDS_KEY).await?.is_some(),
        "seed was written back"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_every_board_persists_empty_collection(app: App) -> Result<(), eyre::Report> {
    app.boards.delete_board(&BoardId::new("1")).await?;
    app.boards.delete_board(&BoardId::new("2")).await?;

    let raw = app
        .store
        .get(BOARDS_KEY)
        .await?
        .ok_or_else(|| eyre::eyre!("boards snapshot present"))?;
    eyre::ensure!(raw.trim() == "[]", "expected empty snapshot, got {raw}");

    let reopened = app.reopen();
    eyre::ensure!(
        reopened.boards.list_boards().await?.is_empty(),
        "no reseed after deleting everything"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn backward_move_is_visible_after_reopen(app: App) -> Result<(), eyre::Report> {
    let board_id = BoardId::new("1");
    let task_id = TaskId::new("401");
    app.boards
        .move_task(&board_id, &task_id, ColumnId::Done, ColumnId::Todo)
        .await?;

    let reopened = app.reopen();
    let (_, task) = reopened.boards.find_task(&board_id, &task_id).await?;
    eyre::ensure!(task.status() == ColumnId::Todo, "status follows the move");

    let raw = app
        .store
        .get(BOARDS_KEY)
        .await?
        .ok_or_else(|| eyre::eyre!("boards snapshot present"))?;
    eyre::ensure!(raw.contains("\"in-progress\""), "kebab-case column ids");
    eyre::ensure!(raw.contains("\"createdAt\""), "camelCase fields");
    Ok(())
}
