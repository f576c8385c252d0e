use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered customer, identified for login by phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub nickname: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(nickname: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            nickname: nickname.into(),
            phone: phone.into(),
            created_at: Utc::now(),
        }
    }
}

crate::impl_entity!(User, "user", "users", user_id, timestamped);
