//! Shared world state for task move BDD scenarios.

use std::sync::Arc;

use eyre::eyre;
use mockable::DefaultClock;
use rstest::fixture;
use taskflow::board::{
    adapters::SnapshotBoardRepository,
    domain::{Board, BoardId, ColumnId, Task},
    services::{BoardService, BoardServiceError},
};
use taskflow::notify::RecordingNotifier;
use taskflow::storage::adapters::InMemorySnapshotStore;

/// Service type used by the BDD world.
pub type TestBoardService =
    BoardService<SnapshotBoardRepository<InMemorySnapshotStore>, DefaultClock>;

/// Scenario world for task move behaviour tests.
pub struct BoardWorld {
    pub store: Arc<InMemorySnapshotStore>,
    pub notifier: RecordingNotifier,
    pub service: TestBoardService,
    pub last_move: Option<Result<Option<Task>, BoardServiceError>>,
}

impl BoardWorld {
    /// Creates a world over an empty snapshot store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemorySnapshotStore::new());
        let notifier = RecordingNotifier::new();
        let service = build_service(&store, &notifier);
        Self {
            store,
            notifier,
            service,
            last_move: None,
        }
    }

    /// Rebuilds the service over the same store, dropping cached state.
    pub fn reopen(&mut self) {
        self.service = build_service(&self.store, &self.notifier);
    }

    /// Loads a board through the service.
    pub fn board(&self, board_id: &str) -> Result<Board, eyre::Report> {
        run_async(self.service.find_board(&BoardId::new(board_id)))?
            .ok_or_else(|| eyre!("board {board_id} not found"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn build_service(
    store: &Arc<InMemorySnapshotStore>,
    notifier: &RecordingNotifier,
) -> TestBoardService {
    BoardService::new(
        Arc::new(SnapshotBoardRepository::new(Arc::clone(store))),
        Arc::new(DefaultClock),
        Arc::new(notifier.clone()),
    )
}

/// Parses a column identifier from scenario text.
pub fn column(raw: &str) -> Result<ColumnId, eyre::Report> {
    ColumnId::try_from(raw).map_err(|err| eyre!("invalid column in scenario: {err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
