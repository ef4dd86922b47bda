//! Then steps for authentication BDD scenarios.

use super::world::{AuthWorld, run_async};
use eyre::{WrapErr, eyre};
use rstest_bdd_macros::then;
use taskflow::auth::domain::User;
use taskflow::storage::{SnapshotStore, USER_KEY};

fn signed_in_user(world: &AuthWorld) -> Result<User, eyre::Report> {
    run_async(world.service.current_user())
        .wrap_err("restore session")?
        .ok_or_else(|| eyre!("nobody is signed in"))
}

#[then(r#"the signed-in user is "{name}""#)]
fn signed_in_user_is(world: &AuthWorld, name: String) -> Result<(), eyre::Report> {
    let user = signed_in_user(world)?;
    if user.name() != name {
        return Err(eyre!("expected {name}, found {}", user.name()));
    }
    Ok(())
}

#[then(r#"the signed-in user has id "{id}""#)]
fn signed_in_user_has_id(world: &AuthWorld, id: String) -> Result<(), eyre::Report> {
    let user = signed_in_user(world)?;
    if user.id().as_str() != id {
        return Err(eyre!("expected id {id}, found {}", user.id()));
    }
    Ok(())
}

#[then("the stored session has no password")]
fn session_has_no_password(world: &AuthWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.get(USER_KEY))
        .wrap_err("read session snapshot")?
        .ok_or_else(|| eyre!("session snapshot missing"))?;
    if stored.contains("password") {
        return Err(eyre!("session snapshot leaks a password: {stored}"));
    }
    Ok(())
}

#[then(r#"the attempt fails with "{message}""#)]
fn attempt_fails(world: &AuthWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_attempt.as_ref() {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(eyre!("expected failure \"{message}\", got {other:?}")),
    }
}

#[then(r#"a destructive notification titled "{title}" was sent"#)]
fn destructive_notification(world: &AuthWorld, title: String) -> Result<(), eyre::Report> {
    let last = world
        .notifier
        .last()
        .ok_or_else(|| eyre!("no notification was sent"))?;
    if !last.is_destructive() || last.title() != title {
        return Err(eyre!("unexpected notification: {last}"));
    }
    Ok(())
}

#[then("nobody is signed in")]
fn nobody_signed_in(world: &AuthWorld) -> Result<(), eyre::Report> {
    let current = run_async(world.service.current_user()).wrap_err("restore session")?;
    if let Some(user) = current {
        return Err(eyre!("expected no session, found {}", user.name()));
    }
    Ok(())
}

#[then("the session snapshot is gone")]
fn session_snapshot_gone(world: &AuthWorld) -> Result<(), eyre::Report> {
    let stored = run_async(world.store.get(USER_KEY)).wrap_err("read session snapshot")?;
    if stored.is_some() {
        return Err(eyre!("session snapshot still present"));
    }
    Ok(())
}
