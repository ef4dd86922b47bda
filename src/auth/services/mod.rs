//! Application services for authentication.

mod session;

pub use session::{AuthService, AuthServiceError, AuthServiceResult, SignupRequest};
