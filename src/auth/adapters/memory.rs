//! In-memory user directory and session store.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::auth::{
    domain::{Account, AuthDomainError, Email, User, mock_accounts},
    ports::{
        DirectoryError, DirectoryResult, SessionStore, SessionStoreError, SessionStoreResult,
        UserDirectory,
    },
};
use crate::storage::StorageError;

/// Thread-safe in-memory user directory.
///
/// Accounts are kept in registration order so that new identifiers can be
/// derived from the account count.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory holding the built-in mock accounts.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthDomainError`] if the built-in accounts are malformed.
    pub fn seeded() -> Result<Self, AuthDomainError> {
        Ok(Self {
            accounts: Arc::new(RwLock::new(mock_accounts()?)),
        })
    }
}

fn poisoned(err: impl std::fmt::Display) -> DirectoryError {
    DirectoryError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &Email) -> DirectoryResult<Option<User>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|account| account.user().email() == email)
            .map(|account| account.user().clone()))
    }

    async fn authenticate(&self, email: &Email, password: &str) -> DirectoryResult<Option<User>> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts
            .iter()
            .find(|account| account.user().email() == email && account.verify(password))
            .map(|account| account.user().clone()))
    }

    async fn insert(&self, account: Account) -> DirectoryResult<()> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let email = account.user().email();
        if accounts.iter().any(|existing| existing.user().email() == email) {
            return Err(DirectoryError::DuplicateEmail(email.clone()));
        }
        accounts.push(account);
        Ok(())
    }

    async fn count(&self) -> DirectoryResult<usize> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.len())
    }
}

/// Session store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    user: Arc<RwLock<Option<User>>>,
}

impl InMemorySessionStore {
    /// Creates a store with no session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn session_poisoned(err: impl std::fmt::Display) -> SessionStoreError {
    StorageError::backend(std::io::Error::other(err.to_string())).into()
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> SessionStoreResult<Option<User>> {
        let user = self.user.read().map_err(session_poisoned)?;
        Ok(user.clone())
    }

    async fn save(&self, user: &User) -> SessionStoreResult<()> {
        let mut slot = self.user.write().map_err(session_poisoned)?;
        *slot = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> SessionStoreResult<()> {
        let mut slot = self.user.write().map_err(session_poisoned)?;
        *slot = None;
        Ok(())
    }
}
