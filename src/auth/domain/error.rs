//! Error types for user and credential validation.

use thiserror::Error;

/// Errors returned while constructing user values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthDomainError {
    /// The email address is malformed.
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    /// The display name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,

    /// The password is empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// The role value is unsupported.
    #[error("unknown user role: {0}")]
    UnknownRole(String),
}
