//! Then steps for task move BDD scenarios.

use super::world::{BoardWorld, column};
use eyre::eyre;
use rstest_bdd_macros::then;
use taskflow::board::{domain::BoardDomainError, services::BoardServiceError};

#[then(r#"column "{name}" on board "{board}" holds task "{task}""#)]
fn column_holds_task(
    world: &BoardWorld,
    name: String,
    board: String,
    task: String,
) -> Result<(), eyre::Report> {
    let loaded = world.board(&board)?;
    let held = loaded
        .column(column(&name)?)
        .tasks()
        .iter()
        .any(|candidate| candidate.id().as_str() == task);
    if !held {
        return Err(eyre!("task {task} is not in column {name} of board {board}"));
    }
    Ok(())
}

#[then(r#"column "{name}" on board "{board}" is empty"#)]
fn column_is_empty(world: &BoardWorld, name: String, board: String) -> Result<(), eyre::Report> {
    let loaded = world.board(&board)?;
    let held = loaded.column(column(&name)?).len();
    if held != 0 {
        return Err(eyre!("column {name} of board {board} holds {held} tasks"));
    }
    Ok(())
}

#[then(r#"task "{task}" on board "{board}" has status "{status}""#)]
fn task_has_status(
    world: &BoardWorld,
    task: String,
    board: String,
    status: String,
) -> Result<(), eyre::Report> {
    let loaded = world.board(&board)?;
    let expected = column(&status)?;
    let found = loaded
        .tasks()
        .find(|candidate| candidate.id().as_str() == task)
        .ok_or_else(|| eyre!("task {task} missing from board {board}"))?;
    if found.status() != expected {
        return Err(eyre!("expected status {expected}, found {}", found.status()));
    }
    Ok(())
}

#[then(r#"board "{board}" still has {count:usize} tasks"#)]
fn board_task_count(world: &BoardWorld, board: String, count: usize) -> Result<(), eyre::Report> {
    let total = world.board(&board)?.tasks().count();
    if total != count {
        return Err(eyre!("expected {count} tasks on board {board}, found {total}"));
    }
    Ok(())
}

#[then(r#"the last notification says the task moved to "{destination}""#)]
fn last_notification_names_destination(
    world: &BoardWorld,
    destination: String,
) -> Result<(), eyre::Report> {
    let spoken = column(&destination)?.spoken();
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre!("no notification was sent"))?;
    let expected_suffix = format!("moved to {spoken}");
    if last.title() != "Task moved" || !last.description().ends_with(&expected_suffix) {
        return Err(eyre!("unexpected notification: {last}"));
    }
    Ok(())
}

#[then("no notification was sent")]
fn no_notification(world: &BoardWorld) -> Result<(), eyre::Report> {
    let sent = world.notifier.snapshot();
    if !sent.is_empty() {
        return Err(eyre!("expected no notifications, got {sent:?}"));
    }
    Ok(())
}

#[then("the move fails because the task is not in that column")]
fn move_rejected(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre!("missing move result"))?;
    if !matches!(
        result,
        Err(BoardServiceError::Domain(BoardDomainError::TaskNotInColumn { .. }))
    ) {
        return Err(eyre!("expected TaskNotInColumn error, got {result:?}"));
    }
    Ok(())
}
