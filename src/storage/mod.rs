//! Key/value snapshot storage.
//!
//! Everything the application persists is a JSON snapshot stored under a
//! well-known key, in the manner of browser local storage:
//!
//! - [`USER_KEY`] holds the signed-in user record
//! - [`BOARDS_KEY`] holds the complete board collection
//!
//! The [`SnapshotStore`] port is implemented by an in-memory adapter for
//! tests and a directory-backed adapter for the CLI.

pub mod adapters;
mod snapshot;

pub use snapshot::{SnapshotStore, StorageError, StorageResult, load_json, save_json};

/// Storage key of the signed-in user record.
pub const USER_KEY: &str = "taskflow_user";

/// Storage key of the board collection.
pub const BOARDS_KEY: &str = "taskflow_boards";
