//! Repository port for board persistence and lookup.

use crate::board::domain::{Board, BoardId};
use crate::storage::StorageError;
use async_trait::async_trait;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Board persistence contract.
///
/// Boards are stored whole; tasks are persisted as part of their board.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Returns every board in creation order.
    async fn list(&self) -> BoardRepositoryResult<Vec<Board>>;

    /// Finds a board by identifier.
    ///
    /// Returns `None` when the board does not exist.
    async fn find_by_id(&self, id: &BoardId) -> BoardRepositoryResult<Option<Board>>;

    /// Stores a new board after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateBoard`] when the board ID
    /// already exists.
    async fn store(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Replaces an existing board, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn update(&self, board: &Board) -> BoardRepositoryResult<()>;

    /// Deletes a board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::NotFound`] when the board does not
    /// exist.
    async fn delete(&self, id: &BoardId) -> BoardRepositoryResult<()>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A board with the same identifier already exists.
    #[error("duplicate board identifier: {0}")]
    DuplicateBoard(BoardId),

    /// The board was not found.
    #[error("board not found: {0}")]
    NotFound(BoardId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(#[from] StorageError),
}
