//! Integration tests for the songs catalog
//!
//! Tests cover:
//! - Schema creation and idempotent startup
//! - Seeding semantics (empty-only, insert-or-ignore on file_path)
//! - Ordered listing and id assignment
//! - Lookup by id and counting


use aria_core::{NewTrack, TrackCatalog, TrackId};
use aria_storage::{songs, SqliteCatalog};
use test_helpers::*;

#[tokio::test]
async fn seed_empty_catalog_inserts_defaults_in_order() {
    let test_db = TestDb::new().await;
    let catalog = SqliteCatalog::new(test_db.pool().clone());

    let inserted = catalog
        .seed_if_empty(&sample_defaults())
        .await
        .expect("Failed to seed");
    assert_eq!(inserted, 3);

    let tracks = catalog.list_all().await.expect("Failed to list");
    assert_eq!(tracks.len(), 3);

    // Auto-assigned ids follow insertion order
    let ids: Vec<i64> = tracks.iter().map(|t| t.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Sunny", "Creative Minds", "Acoustic Breeze"]);
}

#[tokio::test]
async fn seeding_twice_never_duplicates_rows() {
    let test_db = TestDb::new().await;
    let catalog = SqliteCatalog::new(test_db.pool().clone());

    let first = catalog.seed_if_empty(&sample_defaults()).await.unwrap();
    let second = catalog.seed_if_empty(&sample_defaults()).await.unwrap();

    assert_eq!(first, 3);
    assert_eq!(second, 0);
    assert_eq!(catalog.track_count().await.unwrap(), 3);
}

#[tokio::test]
async fn duplicate_file_path_within_defaults_is_skipped() {
    let test_db = TestDb::new().await;
    let catalog = SqliteCatalog::new(test_db.pool().clone());

    let defaults = vec![
        NewTrack::new("Sunny", "Benjamin Tissot", "music/sunny.mp3"),
        NewTrack::new("Sunny (Again)", "Benjamin Tissot", "music/sunny.mp3"),
        NewTrack::new("Creative Minds", "Benjamin Tissot", "music/creative-minds.mp3"),
    ];

    let inserted = catalog.seed_if_empty(&defaults).await.unwrap();
    assert_eq!(inserted, 2);

    let tracks = catalog.list_all().await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].title, "Sunny");
    assert_eq!(tracks[1].title, "Creative Minds");
}

#[tokio::test]
async fn seed_is_noop_when_catalog_already_populated() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let existing = NewTrack::new("Better Days", "Benjamin Tissot", "music/better-days.mp3");
    songs::insert_or_ignore(pool, &existing)
        .await
        .unwrap()
        .expect("Insert should assign an id");

    let catalog = SqliteCatalog::new(pool.clone());
    let inserted = catalog.seed_if_empty(&sample_defaults()).await.unwrap();

    assert_eq!(inserted, 0);
    let tracks = catalog.list_all().await.unwrap();
    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].title, "Better Days");
}

#[tokio::test]
async fn empty_catalog_lists_as_empty_not_error() {
    let test_db = TestDb::new().await;
    let catalog = SqliteCatalog::new(test_db.pool().clone());

    let tracks = catalog.list_all().await.expect("Empty list is not an error");
    assert!(tracks.is_empty());
    assert_eq!(catalog.track_count().await.unwrap(), 0);
}

#[tokio::test]
async fn insert_or_ignore_skips_existing_file_path() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let draft = NewTrack::new("Sunny", "Benjamin Tissot", "music/sunny.mp3");
    let first = songs::insert_or_ignore(pool, &draft).await.unwrap();
    let second = songs::insert_or_ignore(pool, &draft).await.unwrap();

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(songs::count(pool).await.unwrap(), 1);
}

#[tokio::test]
async fn track_by_id_round_trips() {
    let test_db = TestDb::new().await;
    let catalog = SqliteCatalog::new(test_db.pool().clone());
    catalog.seed_if_empty(&sample_defaults()).await.unwrap();

    let track = catalog
        .track_by_id(TrackId::new(2))
        .await
        .unwrap()
        .expect("Track 2 exists");
    assert_eq!(track.title, "Creative Minds");
    assert_eq!(track.file_path.to_string_lossy(), "music/creative-minds.mp3");

    let missing = catalog.track_by_id(TrackId::new(99)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn migrations_are_idempotent_across_restarts() {
    let test_db = TestDb::new().await;

    // A second startup against the same database must not fail
    aria_storage::run_migrations(test_db.pool())
        .await
        .expect("Re-running migrations should be safe");
}
