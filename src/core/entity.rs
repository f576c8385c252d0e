//! Entity traits defining the core abstraction for all persisted aggregates

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Base trait for every aggregate stored by a repository.
///
/// Each entity type exposes exactly one identifier through [`Entity::id`],
/// resolved by the type itself rather than by inspecting which fields an
/// instance happens to carry. Implementations are usually generated with
/// [`impl_entity!`](crate::impl_entity).
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The plural resource name, also the stem of the backing document
    /// (e.g. "menu_items" is stored in `menu_items.json`)
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g. "menu_item"), used in errors and logs
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;
}

/// Entities carrying a creation timestamp, sortable newest first.
pub trait Timestamped {
    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;
}

/// Sort a snapshot newest first.
///
/// The sort is stable, so entities created at the same instant keep their
/// storage order.
pub fn newest_first<T: Timestamped>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde::Deserialize;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct TestEntity {
        test_id: Uuid,
        created_at: DateTime<Utc>,
    }

    impl Entity for TestEntity {
        fn resource_name() -> &'static str {
            "test_entities"
        }

        fn resource_name_singular() -> &'static str {
            "test_entity"
        }

        fn id(&self) -> Uuid {
            self.test_id
        }
    }

    impl Timestamped for TestEntity {
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    #[test]
    fn test_entity_metadata() {
        assert_eq!(TestEntity::resource_name(), "test_entities");
        assert_eq!(TestEntity::resource_name_singular(), "test_entity");
    }

    #[test]
    fn test_newest_first_orders_descending() {
        let now = Utc::now();
        let older = TestEntity {
            test_id: Uuid::new_v4(),
            created_at: now - Duration::minutes(5),
        };
        let newer = TestEntity {
            test_id: Uuid::new_v4(),
            created_at: now,
        };

        let sorted = newest_first(vec![older.clone(), newer.clone()]);
        assert_eq!(sorted[0].id(), newer.id());
        assert_eq!(sorted[1].id(), older.id());
    }
}
