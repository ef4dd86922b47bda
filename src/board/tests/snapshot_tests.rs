//! Tests for the snapshot-backed board repository.

use std::sync::Arc;

use crate::auth::domain::UserId;
use crate::board::{
    adapters::SnapshotBoardRepository,
    domain::{Board, BoardId},
    ports::{BoardRepository, BoardRepositoryError},
};
use crate::storage::{
    BOARDS_KEY, SnapshotStore, StorageError, adapters::InMemorySnapshotStore, load_json,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> Arc<InMemorySnapshotStore> {
    Arc::new(InMemorySnapshotStore::new())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_load_seeds_and_writes_starter_boards(store: Arc<InMemorySnapshotStore>) {
    let repository = SnapshotBoardRepository::new(Arc::clone(&store));

    let boards = repository.list().await.expect("list should succeed");

    let titles: Vec<&str> = boards.iter().map(Board::title).collect();
    assert_eq!(titles, vec!["Product Development", "Marketing Campaign"]);
    let written: Option<Vec<Board>> = load_json(&*store, BOARDS_KEY)
        .await
        .expect("snapshot readable");
    assert_eq!(written, Some(boards));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn existing_snapshot_is_not_reseeded(store: Arc<InMemorySnapshotStore>) {
    store.set(BOARDS_KEY, "[]").await.expect("write empty list");
    let repository = SnapshotBoardRepository::new(Arc::clone(&store));

    assert!(repository.list().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mutations_rewrite_the_whole_collection(store: Arc<InMemorySnapshotStore>) {
    let repository = SnapshotBoardRepository::new(Arc::clone(&store));
    let board = Board::new("Hiring", "", &UserId::new("1"), &DefaultClock).expect("valid board");

    repository.store(&board).await.expect("store should succeed");
    repository
        .delete(&BoardId::new("1"))
        .await
        .expect("delete should succeed");

    let reopened = SnapshotBoardRepository::with_seed(Arc::clone(&store), Vec::new());
    let ids: Vec<String> = reopened
        .list()
        .await
        .expect("list")
        .iter()
        .map(|b| b.id().to_string())
        .collect();
    assert_eq!(ids, vec!["2".to_owned(), board.id().to_string()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_the_last_board_is_persisted(store: Arc<InMemorySnapshotStore>) {
    let repository = SnapshotBoardRepository::new(Arc::clone(&store));
    repository.delete(&BoardId::new("1")).await.expect("delete first");
    repository.delete(&BoardId::new("2")).await.expect("delete second");

    let reopened = SnapshotBoardRepository::new(Arc::clone(&store));
    assert!(reopened.list().await.expect("list").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_and_update_enforce_identity(store: Arc<InMemorySnapshotStore>) {
    let repository = SnapshotBoardRepository::with_seed(Arc::clone(&store), Vec::new());
    let board = Board::new("Hiring", "", &UserId::new("1"), &DefaultClock).expect("valid board");

    let update = repository.update(&board).await;
    assert!(matches!(update, Err(BoardRepositoryError::NotFound(_))));

    repository.store(&board).await.expect("first store");
    let duplicate = repository.store(&board).await;
    assert!(matches!(
        duplicate,
        Err(BoardRepositoryError::DuplicateBoard(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_snapshot_surfaces_decode_error(store: Arc<InMemorySnapshotStore>) {
    store.set(BOARDS_KEY, "{not json").await.expect("write garbage");
    let repository = SnapshotBoardRepository::new(Arc::clone(&store));

    let result = repository.list().await;
    assert!(matches!(
        result,
        Err(BoardRepositoryError::Persistence(StorageError::Decode { .. }))
    ));
}
