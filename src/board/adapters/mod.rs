//! Board repository adapters.

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryBoardRepository;
pub use snapshot::SnapshotBoardRepository;
