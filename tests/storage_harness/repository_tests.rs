//! Macro-generated test suite for `Repository<Sample>` contract validation.
//!
//! The `repository_tests!` macro generates a test module that validates any
//! `Repository<Sample>` backend against the full contract: upsert and
//! lookup, ordering, deletion, filtered reads and the write lock.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//!
//! repository_tests!(Fixture::json_file().await);
//! ```
//!
//! # Generated Tests
//!
//! ## Upsert
//! - `test_save_and_find_by_id`: save then retrieve, every field intact
//! - `test_find_missing`: unknown id returns None
//! - `test_find_all_empty`: fresh store is empty
//! - `test_save_appends_in_order`: new ids are appended
//! - `test_save_replaces_in_place`: an existing id keeps its position
//!
//! ## Delete
//! - `test_delete_existing`: removed entity is gone, others stay
//! - `test_delete_missing`: unknown id returns Ok(false)
//!
//! ## Queries
//! - `test_find_where`: every match in storage order
//! - `test_find_one_where`: first match or None
//! - `test_find_all_is_a_copy`: mutating the result leaves the store intact
//!
//! ## Concurrency
//! - `test_write_lock_prevents_lost_updates`: parallel read-modify-write

/// Generate a full `Repository<Sample>` conformance test suite.
///
/// `$factory` must evaluate to a [`Fixture`](super::Fixture). It is
/// re-evaluated for each test to ensure isolation.
#[macro_export]
macro_rules! repository_tests {
    ($factory:expr) => {
        mod repository_contract_tests {
            use super::*;
            use rust_decimal::Decimal;
            use teahouse::core::{Entity, Repository};
            use uuid::Uuid;

            // ==================================================================
            // Upsert
            // ==================================================================

            #[tokio::test]
            async fn test_save_and_find_by_id() {
                let fixture = $factory;
                let entity = sample("Oolong", 1200);
                let id = entity.id();

                let saved = fixture.repo.save(entity.clone()).await.unwrap();
                assert_eq!(saved, entity);

                let found = fixture.repo.find_by_id(&id).await;
                assert_eq!(found, Some(entity));
            }

            #[tokio::test]
            async fn test_find_missing() {
                let fixture = $factory;
                assert!(fixture.repo.find_by_id(&Uuid::new_v4()).await.is_none());
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let fixture = $factory;
                assert!(fixture.repo.find_all().await.is_empty());
            }

            #[tokio::test]
            async fn test_save_appends_in_order() {
                let fixture = $factory;
                let names = ["Jasmine", "Oolong", "Pu-erh", "Sencha", "Taro"];
                for (i, name) in names.iter().enumerate() {
                    fixture
                        .repo
                        .save(sample(name, 1000 + i as i64))
                        .await
                        .unwrap();
                }

                let all = fixture.repo.find_all().await;
                let stored: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
                assert_eq!(stored, names);
            }

            #[tokio::test]
            async fn test_save_replaces_in_place() {
                let fixture = $factory;
                let first = fixture.repo.save(sample("First", 100)).await.unwrap();
                let second = fixture.repo.save(sample("Second", 200)).await.unwrap();

                let mut renamed = first.clone();
                renamed.name = "Renamed".to_string();
                renamed.price = Decimal::new(150, 2);
                fixture.repo.save(renamed.clone()).await.unwrap();

                assert_eq!(fixture.repo.find_all().await, vec![renamed, second]);
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let fixture = $factory;
                let gone = fixture.repo.save(sample("Gone", 100)).await.unwrap();
                let kept = fixture.repo.save(sample("Kept", 200)).await.unwrap();

                assert!(fixture.repo.delete(&gone.id()).await.unwrap());
                assert!(fixture.repo.find_by_id(&gone.id()).await.is_none());
                assert_eq!(fixture.repo.find_all().await, vec![kept]);
            }

            #[tokio::test]
            async fn test_delete_missing() {
                let fixture = $factory;
                fixture.repo.save(sample("Kept", 200)).await.unwrap();

                assert!(!fixture.repo.delete(&Uuid::new_v4()).await.unwrap());
                assert_eq!(fixture.repo.find_all().await.len(), 1);
            }

            // ==================================================================
            // Queries
            // ==================================================================

            #[tokio::test]
            async fn test_find_where() {
                let fixture = $factory;
                let cheap = fixture.repo.save(sample("Cheap", 500)).await.unwrap();
                fixture.repo.save(sample("Dear", 5000)).await.unwrap();
                let cheaper = fixture.repo.save(sample("Cheaper", 300)).await.unwrap();

                let limit = Decimal::new(1000, 2);
                let found = fixture
                    .repo
                    .find_where(&|s: &Sample| s.price < limit)
                    .await;
                assert_eq!(found, vec![cheap, cheaper]);

                let none = fixture
                    .repo
                    .find_where(&|s: &Sample| s.name == "Nothing")
                    .await;
                assert!(none.is_empty());
            }

            #[tokio::test]
            async fn test_find_one_where() {
                let fixture = $factory;
                let first = fixture.repo.save(sample("Twin", 100)).await.unwrap();
                fixture.repo.save(sample("Twin", 200)).await.unwrap();

                let found = fixture
                    .repo
                    .find_one_where(&|s: &Sample| s.name == "Twin")
                    .await;
                assert_eq!(found, Some(first));

                let missing = fixture
                    .repo
                    .find_one_where(&|s: &Sample| s.name == "Nobody")
                    .await;
                assert!(missing.is_none());
            }

            #[tokio::test]
            async fn test_find_all_is_a_copy() {
                let fixture = $factory;
                fixture.repo.save(sample("Original", 100)).await.unwrap();

                let mut all = fixture.repo.find_all().await;
                all[0].name = "Changed".to_string();
                all.clear();

                let stored = fixture.repo.find_all().await;
                assert_eq!(stored.len(), 1);
                assert_eq!(stored[0].name, "Original");
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_write_lock_prevents_lost_updates() {
                let fixture = $factory;
                let counter = fixture.repo.save(sample("Counter", 0)).await.unwrap();
                let id = counter.id();

                let mut handles = Vec::new();
                for _ in 0..20 {
                    let repo = fixture.repo.clone();
                    handles.push(tokio::spawn(async move {
                        let _guard = repo.write_lock().await;
                        let mut current = repo.find_by_id(&id).await.unwrap();
                        tokio::task::yield_now().await;
                        current.count += 1;
                        repo.save(current).await.unwrap();
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                let stored = fixture.repo.find_by_id(&id).await.unwrap();
                assert_eq!(stored.count, 20);
            }
        }
    };
}
