//! Snapshot store adapters.

pub mod dir;
pub mod memory;

pub use dir::DirSnapshotStore;
pub use memory::InMemorySnapshotStore;
