//! Tests for the persistence gateway.

use std::sync::Arc;

use super::fixtures::{board, ids_in, layout};
use crate::board::{
    adapters::memory::InMemorySnapshotStore,
    domain::{Board, BoardLayout},
    ports::{MockSnapshotStore, SnapshotKey, SnapshotStore, SnapshotStoreError},
    services::{PersistenceError, PersistenceGateway},
};
use mockall::predicate::eq;
use rstest::rstest;

fn store_failure() -> SnapshotStoreError {
    SnapshotStoreError::persistence(std::io::Error::other("disk unavailable"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_load_round_trips_the_board(layout: BoardLayout) {
    let gateway = PersistenceGateway::new(
        Arc::new(InMemorySnapshotStore::new()),
        SnapshotKey::default(),
    );
    let current = board(&layout, &[("todo", &["t1", "t2"]), ("done", &["d1"])]);

    gateway.save(&current).await.expect("save should succeed");
    let loaded = gateway.load(&layout).await.expect("load should succeed");

    assert_eq!(loaded, Some(current));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_board_round_trips_with_every_column(layout: BoardLayout) {
    let gateway = PersistenceGateway::new(
        Arc::new(InMemorySnapshotStore::new()),
        SnapshotKey::default(),
    );
    let seeded = Board::seed(&layout);

    gateway.save(&seeded).await.expect("save should succeed");
    let loaded = gateway
        .load(&layout)
        .await
        .expect("load should succeed")
        .expect("snapshot should be present");

    assert_eq!(loaded.columns().len(), 3);
    assert_eq!(loaded, seeded);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn load_returns_none_without_snapshot(layout: BoardLayout) {
    let gateway = PersistenceGateway::new(
        Arc::new(InMemorySnapshotStore::new()),
        SnapshotKey::default(),
    );
    let loaded = gateway.load(&layout).await.expect("load should succeed");
    assert!(loaded.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_snapshot_is_discarded(layout: BoardLayout) {
    let key = SnapshotKey::default();
    let store = Arc::new(InMemorySnapshotStore::with_entry(
        key.clone(),
        br#"{"todo":[{"id":"t1"}]}"#.to_vec(),
    ));
    let gateway = PersistenceGateway::new(Arc::clone(&store), key.clone());

    let loaded = gateway.load(&layout).await.expect("load should succeed");

    assert!(loaded.is_none());
    assert!(store.get(&key).await.expect("get should succeed").is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn valid_columns_do_not_rescue_a_corrupt_snapshot(layout: BoardLayout) {
    let mut store = MockSnapshotStore::new();
    store.expect_get().times(1).returning(|_| {
        Ok(Some(
            br#"{"todo":[{"id":"t1","name":"ok"}],"done":[{"name":"no id"}]}"#.to_vec(),
        ))
    });
    store
        .expect_remove()
        .with(eq(SnapshotKey::default()))
        .times(1)
        .returning(|_| Ok(()));
    let gateway = PersistenceGateway::new(Arc::new(store), SnapshotKey::default());

    let loaded = gateway.load(&layout).await.expect("load should succeed");

    assert!(loaded.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_removal_of_corrupt_snapshot_still_falls_back(layout: BoardLayout) {
    let mut store = MockSnapshotStore::new();
    store
        .expect_get()
        .returning(|_| Ok(Some(b"not json".to_vec())));
    store.expect_remove().returning(|_| Err(store_failure()));
    let gateway = PersistenceGateway::new(Arc::new(store), SnapshotKey::default());

    let loaded = gateway.load(&layout).await.expect("load should succeed");

    assert!(loaded.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_read_failure_is_reported(layout: BoardLayout) {
    let mut store = MockSnapshotStore::new();
    store.expect_get().returning(|_| Err(store_failure()));
    let gateway = PersistenceGateway::new(Arc::new(store), SnapshotKey::default());

    let result = gateway.load(&layout).await;

    assert!(matches!(result, Err(PersistenceError::Store(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_write_failure_is_reported(layout: BoardLayout) {
    let mut store = MockSnapshotStore::new();
    store
        .expect_put()
        .times(1)
        .returning(|_, _| Err(store_failure()));
    let gateway = PersistenceGateway::new(Arc::new(store), SnapshotKey::default());

    let result = gateway.save(&board(&layout, &[("todo", &["t1"])])).await;

    assert!(matches!(result, Err(PersistenceError::Store(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_overwrites_previous_snapshot(layout: BoardLayout) {
    let gateway = PersistenceGateway::new(
        Arc::new(InMemorySnapshotStore::new()),
        SnapshotKey::default(),
    );
    gateway
        .save(&board(&layout, &[("todo", &["t1"])]))
        .await
        .expect("first save should succeed");
    gateway
        .save(&board(&layout, &[("done", &["t1"])]))
        .await
        .expect("second save should succeed");

    let loaded = gateway
        .load(&layout)
        .await
        .expect("load should succeed")
        .expect("snapshot should be present");

    assert!(ids_in(&loaded, "todo").is_empty());
    assert_eq!(ids_in(&loaded, "done"), vec!["t1"]);
}

#[rstest]
#[case("kanban-board")]
#[case("board_v2.backup")]
fn snapshot_keys_accept_file_safe_names(#[case] raw: &str) {
    assert_eq!(
        SnapshotKey::new(raw).map(|key| key.as_str().to_owned()).ok(),
        Some(raw.to_owned())
    );
}

#[rstest]
#[case("")]
#[case(".hidden")]
#[case("../escape")]
#[case("with space")]
fn snapshot_keys_reject_unsafe_names(#[case] raw: &str) {
    assert!(matches!(
        SnapshotKey::new(raw),
        Err(SnapshotStoreError::InvalidKey(_))
    ));
}
