//! Service layer for login, signup, logout, and session restore.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::auth::{
    domain::{Account, AuthDomainError, Email, User, UserId, UserRole, avatar_url},
    ports::{DirectoryError, SessionStore, SessionStoreError, UserDirectory},
};
use crate::notify::{Notification, Notifier};

/// Avatar background of accounts created through signup.
const SIGNUP_AVATAR_BACKGROUND: &str = "10B981";

/// Request payload for creating an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    email: String,
    password: String,
    name: String,
}

impl SignupRequest {
    /// Creates a signup request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }
}

/// Service-level errors for authentication.
#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// No account matches the email and password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An account already exists for the email.
    #[error("User already exists")]
    UserAlreadyExists(Email),

    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),

    /// Directory operation failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Session persistence failed.
    #[error(transparent)]
    Session(#[from] SessionStoreError),
}

/// Result type for auth service operations.
pub type AuthServiceResult<T> = Result<T, AuthServiceError>;

/// Authentication orchestration service.
#[derive(Clone)]
pub struct AuthService<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    directory: Arc<D>,
    sessions: Arc<S>,
    notifier: Arc<dyn Notifier>,
}

impl<D, S> AuthService<D, S>
where
    D: UserDirectory,
    S: SessionStore,
{
    /// Creates a new auth service.
    #[must_use]
    pub fn new(directory: Arc<D>, sessions: Arc<S>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            directory,
            sessions,
            notifier,
        }
    }

    /// Returns the user of the saved session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Session`] when the session snapshot cannot
    /// be read.
    pub async fn restore(&self) -> AuthServiceResult<Option<User>> {
        Ok(self.sessions.load().await?)
    }

    /// Returns the signed-in user, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Session`] when the session snapshot cannot
    /// be read.
    pub async fn current_user(&self) -> AuthServiceResult<Option<User>> {
        self.restore().await
    }

    /// Signs in with an email and password.
    ///
    /// A malformed email is reported as invalid credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidCredentials`] when no account
    /// matches, or a directory/session error.
    pub async fn login(&self, email: &str, password: &str) -> AuthServiceResult<User> {
        let result = self.try_login(email, password).await;
        match result {
            Ok(user) => {
                info!(user_id = %user.id(), "user logged in");
                self.notifier.notify(Notification::new(
                    "Welcome back!",
                    format!("Logged in as {}", user.name()),
                ));
                Ok(user)
            }
            Err(err) => Err(self.reject("Login failed", err)),
        }
    }

    async fn try_login(&self, email: &str, password: &str) -> AuthServiceResult<User> {
        let address = Email::new(email).map_err(|_| AuthServiceError::InvalidCredentials)?;
        let user = self
            .directory
            .authenticate(&address, password)
            .await?
            .ok_or(AuthServiceError::InvalidCredentials)?;
        self.sessions.save(&user).await?;
        Ok(user)
    }

    /// Creates an account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UserAlreadyExists`] when the email is
    /// taken, [`AuthServiceError::Domain`] for invalid input, or a
    /// directory/session error.
    pub async fn signup(&self, request: SignupRequest) -> AuthServiceResult<User> {
        let result = self.try_signup(request).await;
        match result {
            Ok(user) => {
                info!(user_id = %user.id(), "user signed up");
                self.notifier.notify(Notification::new(
                    "Account created",
                    format!("Welcome to TaskFlow, {}!", user.name()),
                ));
                Ok(user)
            }
            Err(err) => Err(self.reject("Signup failed", err)),
        }
    }

    async fn try_signup(&self, request: SignupRequest) -> AuthServiceResult<User> {
        let email = Email::new(request.email)?;
        if self.directory.find_by_email(&email).await?.is_some() {
            return Err(AuthServiceError::UserAlreadyExists(email));
        }

        let id = UserId::new((self.directory.count().await? + 1).to_string());
        let avatar = avatar_url(&request.name, SIGNUP_AVATAR_BACKGROUND);
        let user = User::new(id, request.name, email.clone(), avatar, UserRole::User)?;
        let account = Account::new(user.clone(), &request.password)?;
        self.directory
            .insert(account)
            .await
            .map_err(|err| match err {
                DirectoryError::DuplicateEmail(taken) => AuthServiceError::UserAlreadyExists(taken),
                other => AuthServiceError::Directory(other),
            })?;
        self.sessions.save(&user).await?;
        Ok(user)
    }

    /// Ends the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Session`] when the session snapshot cannot
    /// be removed.
    pub async fn logout(&self) -> AuthServiceResult<()> {
        self.sessions.clear().await?;
        info!("user logged out");
        self.notifier.notify(Notification::new(
            "Logged out",
            "You have been logged out successfully",
        ));
        Ok(())
    }

    fn reject(&self, title: &str, err: AuthServiceError) -> AuthServiceError {
        warn!(error = %err, "{title}");
        self.notifier
            .notify(Notification::destructive(title, err.to_string()));
        err
    }
}
