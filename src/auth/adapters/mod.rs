//! Auth adapters.

pub mod memory;
pub mod snapshot;

pub use memory::{InMemorySessionStore, InMemoryUserDirectory};
pub use snapshot::SnapshotSessionStore;
