//! Directory accounts: a public user record plus a password digest.

use super::{AuthDomainError, Email, User, UserId, UserRole, avatar_url};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA-256 digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest([u8; 32]);

impl PasswordDigest {
    /// Hashes a clear-text password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyPassword`] for an empty password.
    pub fn from_password(password: &str) -> Result<Self, AuthDomainError> {
        if password.is_empty() {
            return Err(AuthDomainError::EmptyPassword);
        }
        Ok(Self(Sha256::digest(password.as_bytes()).into()))
    }

    /// Returns `true` when `password` hashes to this digest.
    #[must_use]
    pub fn matches(&self, password: &str) -> bool {
        Sha256::digest(password.as_bytes()).as_slice() == self.0.as_slice()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}

/// A directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    user: User,
    password: PasswordDigest,
}

impl Account {
    /// Creates an account from a user record and a clear-text password.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptyPassword`] for an empty password.
    pub fn new(user: User, password: &str) -> Result<Self, AuthDomainError> {
        Ok(Self {
            user,
            password: PasswordDigest::from_password(password)?,
        })
    }

    /// Returns the public user record.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns `true` when `password` matches the stored digest.
    #[must_use]
    pub fn verify(&self, password: &str) -> bool {
        self.password.matches(password)
    }
}

const MOCK_PASSWORD: &str = "password123";

/// Returns the built-in accounts every directory starts with.
///
/// # Errors
///
/// Returns an [`AuthDomainError`] only if the built-in data is malformed.
pub fn mock_accounts() -> Result<Vec<Account>, AuthDomainError> {
    let seeds = [
        ("1", "John Doe", "john@example.com", "8B5CF6", UserRole::Admin),
        ("2", "Jane Smith", "jane@example.com", "0EA5E9", UserRole::User),
    ];
    seeds
        .into_iter()
        .map(|(id, name, email, background, role)| {
            let user = User::new(
                UserId::new(id),
                name,
                Email::new(email)?,
                avatar_url(name, background),
                role,
            )?;
            Account::new(user, MOCK_PASSWORD)
        })
        .collect()
}
