//! When steps for task move BDD scenarios.

use super::world::{BoardWorld, column, run_async};
use rstest_bdd_macros::when;
use taskflow::board::domain::{BoardId, TaskId};

#[when(r#"task "{task}" on board "{board}" is moved from "{source}" to "{destination}""#)]
fn move_task(
    world: &mut BoardWorld,
    task: String,
    board: String,
    source: String,
    destination: String,
) -> Result<(), eyre::Report> {
    let from = column(&source)?;
    let to = column(&destination)?;
    let result = run_async(world.service.move_task(
        &BoardId::new(board),
        &TaskId::new(task),
        from,
        to,
    ));
    world.last_move = Some(result);
    Ok(())
}

#[when("the board store is reopened")]
fn reopen_store(world: &mut BoardWorld) {
    world.reopen();
}
