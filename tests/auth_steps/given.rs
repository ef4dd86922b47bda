//! Given steps for authentication BDD scenarios.

use super::world::{AuthWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#""{email}" has signed in with password "{password}""#)]
fn has_signed_in(
    world: &mut AuthWorld,
    email: String,
    password: String,
) -> Result<(), eyre::Report> {
    run_async(world.service.login(&email, &password)).wrap_err("sign in for scenario")?;
    Ok(())
}
