//! Registration and phone-number login

use crate::core::{EntityError, RuleError, TeahouseError};
use crate::entities::User;
use crate::repositories::UserRepository;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;
use validator::{Validate, ValidationError};

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // 8 to 15 digits, optional leading '+'
    Regex::new(r"^\+?[1-9]\d{7,14}$").expect("phone pattern is valid")
});

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_format"))
    }
}

/// Sign-up form
#[derive(Debug, Clone, Validate)]
pub struct Registration {
    #[validate(length(min = 1, max = 32))]
    pub nickname: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: String,
}

impl Registration {
    pub fn new(nickname: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
        }
    }
}

/// A logged-in user.
///
/// Held by the caller and passed explicitly; nothing in the crate tracks a
/// current user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn user_id(&self) -> Uuid {
        self.user.user_id
    }
}

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Create an account, one per phone number
    pub async fn register(&self, form: Registration) -> Result<User, TeahouseError> {
        form.validate()?;

        let _guard = self.users.write_lock().await;
        if self.users.find_by_phone(&form.phone).await.is_some() {
            return Err(RuleError::PhoneTaken { phone: form.phone }.into());
        }

        let user = self
            .users
            .save(User::new(form.nickname, form.phone))
            .await?;
        tracing::info!(user_id = %user.user_id, "User registered");
        Ok(user)
    }

    pub async fn login(&self, phone: &str) -> Result<Session, TeahouseError> {
        let phone = phone.trim();
        let user = self
            .users
            .find_by_phone(phone)
            .await
            .ok_or_else(|| EntityError::NotFoundByKey {
                entity_type: "user",
                field: "phone",
                value: phone.to_string(),
            })?;

        tracing::debug!(user_id = %user.user_id, "User logged in");
        Ok(Session {
            user,
            logged_in_at: Utc::now(),
        })
    }

    pub fn logout(&self, session: Session) {
        tracing::debug!(user_id = %session.user_id(), "User logged out");
    }
}
