use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Valid star ratings
pub const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// A customer's rating of an order, optionally answered by the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: Uuid,
    pub user_id: Uuid,
    pub order_id: Uuid,
    pub rating: u8,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub reply: Option<String>,
}

impl Review {
    pub fn new(user_id: Uuid, order_id: Uuid, rating: u8, content: impl Into<String>) -> Self {
        Self {
            review_id: Uuid::new_v4(),
            user_id,
            order_id,
            rating,
            content: content.into(),
            created_at: Utc::now(),
            reply: None,
        }
    }
}

crate::impl_entity!(Review, "review", "reviews", review_id, timestamped);
