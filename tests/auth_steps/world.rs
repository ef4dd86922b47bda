//! Shared world state for authentication BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskflow::auth::{
    adapters::{InMemoryUserDirectory, SnapshotSessionStore},
    domain::User,
    services::{AuthService, AuthServiceError},
};
use taskflow::notify::RecordingNotifier;
use taskflow::storage::adapters::InMemorySnapshotStore;

/// Service type used by the BDD world.
pub type TestAuthService =
    AuthService<InMemoryUserDirectory, SnapshotSessionStore<InMemorySnapshotStore>>;

/// Scenario world for authentication behaviour tests.
pub struct AuthWorld {
    pub store: Arc<InMemorySnapshotStore>,
    pub notifier: RecordingNotifier,
    pub service: TestAuthService,
    pub last_attempt: Option<Result<User, AuthServiceError>>,
}

impl AuthWorld {
    /// Creates a world over the seeded mock directory and an empty store.
    ///
    /// # Panics
    ///
    /// Panics when the mock directory cannot be built.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemorySnapshotStore::new());
        let notifier = RecordingNotifier::new();
        let directory = InMemoryUserDirectory::seeded().expect("mock directory builds");
        let service = AuthService::new(
            Arc::new(directory),
            Arc::new(SnapshotSessionStore::new(Arc::clone(&store))),
            Arc::new(notifier.clone()),
        );
        Self {
            store,
            notifier,
            service,
            last_attempt: None,
        }
    }
}

impl Default for AuthWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AuthWorld {
    AuthWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
