//! When steps for authentication BDD scenarios.

use super::world::{AuthWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskflow::auth::services::SignupRequest;

#[when(r#""{email}" signs in with password "{password}""#)]
fn sign_in(world: &mut AuthWorld, email: String, password: String) {
    world.last_attempt = Some(run_async(world.service.login(&email, &password)));
}

#[when(r#""{email}" signs up as "{name}" with password "{password}""#)]
fn sign_up(world: &mut AuthWorld, email: String, name: String, password: String) {
    let request = SignupRequest::new(email, password, name);
    world.last_attempt = Some(run_async(world.service.signup(request)));
}

#[when("the user signs out")]
fn sign_out(world: &mut AuthWorld) -> Result<(), eyre::Report> {
    run_async(world.service.logout()).wrap_err("sign out")
}
