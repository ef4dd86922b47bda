//! Domain model for users and credentials.

mod account;
mod error;
mod user;

pub use account::{Account, PasswordDigest, mock_accounts};
pub use error::AuthDomainError;
pub use user::{Email, User, UserId, UserRole, avatar_url};
