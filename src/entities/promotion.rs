use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-boxed announcement shown to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub promotion_id: Uuid,
    pub title: String,
    pub content: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub is_active: bool,
}

impl Promotion {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Self {
        Self {
            promotion_id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            start_at,
            end_at,
            is_active: true,
        }
    }

    /// Active and `now` within the window, bounds included
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.start_at <= now && now <= self.end_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

crate::impl_entity!(Promotion, "promotion", "promotions", promotion_id);
