//! Given steps for task move BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("the starter boards in a fresh store")]
fn starter_boards(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let boards = run_async(world.service.list_boards()).wrap_err("seed starter boards")?;
    if boards.len() != 2 {
        return Err(eyre::eyre!("expected 2 starter boards, found {}", boards.len()));
    }
    Ok(())
}
