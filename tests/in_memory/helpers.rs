//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskflow::auth::{
    adapters::{InMemoryUserDirectory, SnapshotSessionStore},
    services::AuthService,
};
use taskflow::board::{adapters::SnapshotBoardRepository, services::BoardService};
use taskflow::notify::RecordingNotifier;
use taskflow::storage::adapters::InMemorySnapshotStore;

/// Auth service over the shared store.
pub type TestAuthService =
    AuthService<InMemoryUserDirectory, SnapshotSessionStore<InMemorySnapshotStore>>;

/// Board service over the shared store.
pub type TestBoardService =
    BoardService<SnapshotBoardRepository<InMemorySnapshotStore>, DefaultClock>;

/// Both services wired onto one snapshot store.
pub struct App {
    pub store: Arc<InMemorySnapshotStore>,
    pub notifier: RecordingNotifier,
    pub auth: TestAuthService,
    pub boards: TestBoardService,
}

impl App {
    /// Builds fresh board and auth services over the existing store.
    #[must_use]
    pub fn reopen(&self) -> Self {
        wire(Arc::clone(&self.store))
    }
}

/// Provides both services over an empty in-memory store.
#[fixture]
pub fn app() -> App {
    wire(Arc::new(InMemorySnapshotStore::new()))
}

fn wire(store: Arc<InMemorySnapshotStore>) -> App {
    let notifier = RecordingNotifier::new();
    let directory = InMemoryUserDirectory::seeded().expect("mock directory builds");
    let auth = AuthService::new(
        Arc::new(directory),
        Arc::new(SnapshotSessionStore::new(Arc::clone(&store))),
        Arc::new(notifier.clone()),
    );
    let boards = BoardService::new(
        Arc::new(SnapshotBoardRepository::new(Arc::clone(&store))),
        Arc::new(DefaultClock),
        Arc::new(notifier.clone()),
    );
    App {
        store,
        notifier,
        auth,
        boards,
    }
}
