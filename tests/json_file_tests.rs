//! Integration tests for JsonFileRepository using the storage test harness.
//!
//! Besides the shared contract suite, these tests reopen the document from
//! disk to check that every mutation survives a restart.
//!
//! # Notes
//!
//! Each test gets a fresh temporary directory via `tempfile::TempDir`,
//! kept alive by the fixture for the duration of the test.

#[macro_use]
mod storage_harness;

use rust_decimal::Decimal;
use storage_harness::*;
use teahouse::core::{Entity, Repository};
use teahouse::storage::JsonFileRepository;

repository_tests!(Fixture::json_file().await);

async fn reopen(fixture: &Fixture) -> JsonFileRepository<Sample> {
    let dir = fixture.dir.as_ref().unwrap();
    JsonFileRepository::<Sample>::open_in(dir.path())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_saved_entities_survive_reopen() {
    let fixture = Fixture::json_file().await;
    let first = fixture.repo.save(sample("Oolong", 1200)).await.unwrap();
    let second = fixture.repo.save(sample("Taro", 1550)).await.unwrap();

    let reopened = reopen(&fixture).await;
    assert_eq!(reopened.find_all().await, vec![first, second]);
}

#[tokio::test]
async fn test_update_and_delete_survive_reopen() {
    let fixture = Fixture::json_file().await;
    let mut kept = fixture.repo.save(sample("Kept", 1000)).await.unwrap();
    let gone = fixture.repo.save(sample("Gone", 2000)).await.unwrap();

    kept.price = Decimal::new(1099, 2);
    kept.tags.push("limited".to_string());
    fixture.repo.save(kept.clone()).await.unwrap();
    fixture.repo.delete(&gone.id()).await.unwrap();

    let reopened = reopen(&fixture).await;
    assert_eq!(reopened.find_all().await, vec![kept]);
}

#[tokio::test]
async fn test_document_is_named_after_resource() {
    let fixture = Fixture::json_file().await;
    fixture.repo.save(sample("Oolong", 1200)).await.unwrap();

    let path = fixture.dir.as_ref().unwrap().path().join("samples.json");
    let document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();

    let entries = document.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["price"], "12.00");
    assert_eq!(entries[0]["name"], "Oolong");
}

#[tokio::test]
async fn test_truncated_document_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("samples.json"), "[{\"id\": \"not-finished").unwrap();

    let repo = JsonFileRepository::<Sample>::open_in(dir.path())
        .await
        .unwrap();
    assert!(repo.find_all().await.is_empty());

    let saved = repo.save(sample("Fresh", 100)).await.unwrap();
    let reopened = JsonFileRepository::<Sample>::open_in(dir.path())
        .await
        .unwrap();
    assert_eq!(reopened.find_all().await, vec![saved]);
}
