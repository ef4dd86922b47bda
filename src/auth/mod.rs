//! Authentication against the mock user directory.
//!
//! Users sign in with an email and password checked against a small static
//! directory, can sign up new accounts for the lifetime of the directory, and
//! keep a session record in the snapshot store so that later commands see the
//! same signed-in user. The module follows the same layering as [`board`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! [`board`]: crate::board

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
