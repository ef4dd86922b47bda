//! Board repository persisted as the `taskflow_boards` snapshot.
//!
//! The whole collection is read for every operation and written back whole
//! after every mutation. When the snapshot is absent the repository seeds it
//! with the starter boards.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::board::{
    domain::{Board, BoardId, seed::initial_boards},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::storage::{BOARDS_KEY, SnapshotStore, load_json, save_json};

/// Board repository over a [`SnapshotStore`].
pub struct SnapshotBoardRepository<S: SnapshotStore> {
    store: Arc<S>,
    seed: Vec<Board>,
    write_gate: Mutex<()>,
}

impl<S: SnapshotStore> SnapshotBoardRepository<S> {
    /// Creates a repository that seeds an empty store with the starter boards.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_seed(store, initial_boards())
    }

    /// Creates a repository that seeds an empty store with `seed`.
    #[must_use]
    pub fn with_seed(store: Arc<S>, seed: Vec<Board>) -> Self {
        Self {
            store,
            seed,
            write_gate: Mutex::new(()),
        }
    }

    async fn load(&self) -> BoardRepositoryResult<Vec<Board>> {
        if let Some(boards) = load_json::<Vec<Board>, _>(&*self.store, BOARDS_KEY).await? {
            return Ok(boards);
        }
        info!(boards = self.seed.len(), "seeding board snapshot");
        self.save(&self.seed).await?;
        Ok(self.seed.clone())
    }

    async fn save(&self, boards: &[Board]) -> BoardRepositoryResult<()> {
        save_json(&*self.store, BOARDS_KEY, boards).await?;
        debug!(boards = boards.len(), "board snapshot written");
        Ok(())
    }

    /// Loads, mutates, and writes back the collection under the write gate.
    async fn modify<F>(&self, mutate: F) -> BoardRepositoryResult<()>
    where
        F: FnOnce(&mut Vec<Board>) -> BoardRepositoryResult<()> + Send,
    {
        let _gate = self.write_gate.lock().await;
        let mut boards = self.load().await?;
        mutate(&mut boards)?;
        self.save(&boards).await
    }
}

#[async_trait]
impl<S: SnapshotStore> BoardRepository for SnapshotBoardRepository<S> {
    async fn list(&self) -> BoardRepositoryResult<Vec<Board>> {
        self.load().await
    }

    async fn find_by_id(&self, id: &BoardId) -> BoardRepositoryResult<Option<Board>> {
        let boards = self.load().await?;
        Ok(boards.into_iter().find(|board| board.id() == id))
    }

    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        self.modify(|boards| {
            if boards.iter().any(|existing| existing.id() == board.id()) {
                return Err(BoardRepositoryError::DuplicateBoard(board.id().clone()));
            }
            boards.push(board.clone());
            Ok(())
        })
        .await
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        self.modify(|boards| {
            let slot = boards
                .iter_mut()
                .find(|existing| existing.id() == board.id())
                .ok_or_else(|| BoardRepositoryError::NotFound(board.id().clone()))?;
            *slot = board.clone();
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: &BoardId) -> BoardRepositoryResult<()> {
        self.modify(|boards| {
            let before = boards.len();
            boards.retain(|board| board.id() != id);
            if boards.len() == before {
                return Err(BoardRepositoryError::NotFound(id.clone()));
            }
            Ok(())
        })
        .await
    }
}
