use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A (user, menu item) bookmark; each pair exists at most once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub favorite_id: Uuid,
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Uuid, item_id: Uuid) -> Self {
        Self {
            favorite_id: Uuid::new_v4(),
            user_id,
            item_id,
            created_at: Utc::now(),
        }
    }
}

crate::impl_entity!(Favorite, "favorite", "favorites", favorite_id, timestamped);
