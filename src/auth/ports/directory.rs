//! User directory port.

use crate::auth::domain::{Account, Email, User};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Lookup and registration of user accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Returns the user registered under `email`.
    async fn find_by_email(&self, email: &Email) -> DirectoryResult<Option<User>>;

    /// Returns the user when both `email` and `password` match an account.
    ///
    /// Returns `None` for an unknown email or a wrong password, without
    /// distinguishing the two.
    async fn authenticate(&self, email: &Email, password: &str) -> DirectoryResult<Option<User>>;

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::DuplicateEmail`] when the email is taken.
    async fn insert(&self, account: Account) -> DirectoryResult<()>;

    /// Returns the number of registered accounts.
    async fn count(&self) -> DirectoryResult<usize>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    /// An account with the same email already exists.
    #[error("an account already exists for {0}")]
    DuplicateEmail(Email),

    /// Backend failure.
    #[error("directory error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
