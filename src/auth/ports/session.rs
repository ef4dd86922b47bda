//! Session persistence port.

use crate::auth::domain::User;
use crate::storage::StorageError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Persistence of the signed-in user between invocations.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the saved user, if a session exists.
    async fn load(&self) -> SessionStoreResult<Option<User>>;

    /// Saves `user` as the signed-in user.
    async fn save(&self, user: &User) -> SessionStoreResult<()>;

    /// Ends the current session.
    async fn clear(&self) -> SessionStoreResult<()>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// The underlying snapshot store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
