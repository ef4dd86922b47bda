//! In-memory board repository for tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Board, BoardId},
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use crate::storage::StorageError;

/// Thread-safe in-memory board repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardRepository {
    boards: Arc<RwLock<Vec<Board>>>,
}

impl InMemoryBoardRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `boards`.
    #[must_use]
    pub fn with_boards(boards: Vec<Board>) -> Self {
        Self {
            boards: Arc::new(RwLock::new(boards)),
        }
    }
}

fn poisoned(err: impl std::fmt::Display) -> BoardRepositoryError {
    StorageError::backend(std::io::Error::other(err.to_string())).into()
}

#[async_trait]
impl BoardRepository for InMemoryBoardRepository {
    async fn list(&self) -> BoardRepositoryResult<Vec<Board>> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(boards.clone())
    }

    async fn find_by_id(&self, id: &BoardId) -> BoardRepositoryResult<Option<Board>> {
        let boards = self.boards.read().map_err(poisoned)?;
        Ok(boards.iter().find(|board| board.id() == id).cloned())
    }

    async fn store(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        if boards.iter().any(|existing| existing.id() == board.id()) {
            return Err(BoardRepositoryError::DuplicateBoard(board.id().clone()));
        }
        boards.push(board.clone());
        Ok(())
    }

    async fn update(&self, board: &Board) -> BoardRepositoryResult<()> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        let slot = boards
            .iter_mut()
            .find(|existing| existing.id() == board.id())
            .ok_or_else(|| BoardRepositoryError::NotFound(board.id().clone()))?;
        *slot = board.clone();
        Ok(())
    }

    async fn delete(&self, id: &BoardId) -> BoardRepositoryResult<()> {
        let mut boards = self.boards.write().map_err(poisoned)?;
        let before = boards.len();
        boards.retain(|board| board.id() != id);
        if boards.len() == before {
            return Err(BoardRepositoryError::NotFound(id.clone()));
        }
        Ok(())
    }
}
