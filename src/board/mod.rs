//! Kanban boards, columns, and tasks.
//!
//! A board owns four fixed status columns; every task lives in exactly the
//! column matching its status. Tasks are created into a column, edited in
//! place, deleted, and moved between columns. The whole board collection is
//! persisted as a single snapshot after every change. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
