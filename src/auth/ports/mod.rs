//! Port contracts for authentication.
//!
//! Ports define infrastructure-agnostic interfaces used by the auth service.

pub mod directory;
pub mod session;

pub use directory::{DirectoryError, DirectoryResult, UserDirectory};
pub use session::{SessionStore, SessionStoreError, SessionStoreResult};
