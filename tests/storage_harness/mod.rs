//! Shared test harness for repository backend testing
//!
//! Provides `Sample`, a small entity with a decimal, a counter and a list
//! field, and `Fixture`, which opens a fresh repository per test.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! repository_tests!(Fixture::in_memory().await);
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod repository_tests;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tempfile::TempDir;
use uuid::Uuid;

use teahouse::core::Repository;
use teahouse::storage::{InMemoryRepository, JsonFileRepository};

/// A test entity covering strings, decimals, counters and nested lists
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub count: u32,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

teahouse::impl_entity!(Sample, "sample", "samples", id, timestamped);

/// Create a sample with a fresh id
pub fn sample(name: &str, cents: i64) -> Sample {
    Sample {
        id: Uuid::new_v4(),
        name: name.to_string(),
        price: Decimal::new(cents, 2),
        count: 0,
        tags: vec!["seasonal".to_string()],
        created_at: Utc::now(),
    }
}

/// A repository plus whatever must outlive it
pub struct Fixture {
    pub repo: Arc<dyn Repository<Sample>>,
    pub dir: Option<TempDir>,
}

impl Fixture {
    pub async fn in_memory() -> Self {
        Self {
            repo: Arc::new(InMemoryRepository::<Sample>::new()),
            dir: None,
        }
    }

    pub async fn json_file() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::<Sample>::open_in(dir.path())
            .await
            .unwrap();
        Self {
            repo: Arc::new(repo),
            dir: Some(dir),
        }
    }
}
