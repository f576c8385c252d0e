//! Typed error handling for the ordering core
//!
//! Callers match on specific failures instead of parsing messages.
//!
//! # Error Categories
//!
//! - [`EntityError`]: an identifier or lookup key did not resolve
//! - [`InputError`]: the caller passed a value outside its domain
//! - [`RuleError`]: the request is well-formed but breaks a business rule
//! - [`StorageError`]: the backing document could not be read or written
//!
//! # Example
//!
//! ```rust,ignore
//! match orders.place_order(&user_id, "").await {
//!     Ok(order) => println!("placed {}", order.order_id()),
//!     Err(TeahouseError::Rule(RuleError::EmptyCart { .. })) => println!("nothing to order"),
//!     Err(e) => eprintln!("{} ({})", e, e.error_code()),
//! }
//! ```

use crate::entities::OrderStatus;
use rust_decimal::Decimal;
use std::path::PathBuf;
use uuid::Uuid;

/// The main error type returned by every service operation
#[derive(Debug, thiserror::Error)]
pub enum TeahouseError {
    /// An entity id or lookup key did not resolve
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Input outside its allowed domain
    #[error(transparent)]
    Input(#[from] InputError),

    /// Business rule violation (expected, never fatal)
    #[error(transparent)]
    Rule(#[from] RuleError),

    /// Persistence failure on save
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Broad classification of a [`TeahouseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    BusinessRuleViolation,
    PersistenceFailure,
}

impl TeahouseError {
    /// Get the category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TeahouseError::Entity(_) => ErrorKind::NotFound,
            TeahouseError::Input(_) => ErrorKind::InvalidInput,
            TeahouseError::Rule(_) => ErrorKind::BusinessRuleViolation,
            TeahouseError::Storage(_) => ErrorKind::PersistenceFailure,
        }
    }

    /// Get the stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TeahouseError::Entity(e) => e.error_code(),
            TeahouseError::Input(e) => e.error_code(),
            TeahouseError::Rule(e) => e.error_code(),
            TeahouseError::Storage(e) => e.error_code(),
        }
    }

    /// Shorthand for an unresolved identifier
    pub fn not_found(entity_type: &'static str, id: Uuid) -> Self {
        TeahouseError::Entity(EntityError::NotFound { entity_type, id })
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors raised when an entity cannot be resolved
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    /// No entity with this id
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: Uuid },

    /// No entity matching a secondary key (e.g. a phone number)
    #[error("{entity_type} with {field} '{value}' not found")]
    NotFoundByKey {
        entity_type: &'static str,
        field: &'static str,
        value: String,
    },
}

impl EntityError {
    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } | EntityError::NotFoundByKey { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Input Errors
// =============================================================================

/// Errors related to out-of-range or malformed input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Rating outside [1, 5]
    #[error("rating must be between 1 and 5 (got {rating})")]
    InvalidRating { rating: i64 },

    /// Quantity that cannot be stored on a line item
    #[error("quantity must be between 1 and {max} (got {quantity})", max = u32::MAX)]
    InvalidQuantity { quantity: i64 },

    /// Negative monetary amount
    #[error("{field} must not be negative (got {value})")]
    NegativePrice { field: &'static str, value: Decimal },

    /// Monetary amount above the menu ceiling
    #[error("{field} must not exceed {max} (got {value})")]
    PriceTooHigh {
        field: &'static str,
        value: Decimal,
        max: Decimal,
    },

    /// Validity window that ends before it starts
    #[error("promotion window ends ({end}) before it starts ({start})")]
    InvalidWindow {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Field-level validation failures reported by `validator`
    #[error("validation failed: {0}")]
    Validation(String),
}

impl InputError {
    pub fn error_code(&self) -> &'static str {
        match self {
            InputError::InvalidRating { .. } => "INVALID_RATING",
            InputError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            InputError::NegativePrice { .. } => "NEGATIVE_PRICE",
            InputError::PriceTooHigh { .. } => "PRICE_TOO_HIGH",
            InputError::InvalidWindow { .. } => "INVALID_WINDOW",
            InputError::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for InputError {
    fn from(errors: validator::ValidationErrors) -> Self {
        InputError::Validation(errors.to_string())
    }
}

impl From<validator::ValidationErrors> for TeahouseError {
    fn from(errors: validator::ValidationErrors) -> Self {
        TeahouseError::Input(errors.into())
    }
}

// =============================================================================
// Business Rule Errors
// =============================================================================

/// Violations of ordering rules
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Checkout attempted with nothing in the cart
    #[error("cart of user '{user_id}' is empty")]
    EmptyCart { user_id: Uuid },

    /// Menu item is sold out
    #[error("menu item '{name}' is sold out")]
    Unavailable { item_id: Uuid, name: String },

    /// Phone number already registered
    #[error("phone number '{phone}' is already registered")]
    PhoneTaken { phone: String },

    /// The (user, item) pair is already a favorite
    #[error("item '{item_id}' is already a favorite of user '{user_id}'")]
    AlreadyFavorited { user_id: Uuid, item_id: Uuid },

    /// The (user, item) pair is not a favorite
    #[error("item '{item_id}' is not a favorite of user '{user_id}'")]
    NotFavorited { user_id: Uuid, item_id: Uuid },

    /// Status change not allowed by the order state machine
    #[error("order '{order_id}' cannot move from {from} to {to}")]
    IllegalTransition {
        order_id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    },
}

impl RuleError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RuleError::EmptyCart { .. } => "EMPTY_CART",
            RuleError::Unavailable { .. } => "ITEM_UNAVAILABLE",
            RuleError::PhoneTaken { .. } => "PHONE_TAKEN",
            RuleError::AlreadyFavorited { .. } => "ALREADY_FAVORITED",
            RuleError::NotFavorited { .. } => "NOT_FAVORITED",
            RuleError::IllegalTransition { .. } => "ILLEGAL_TRANSITION",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to the backing documents
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the document failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be encoded
    #[error("failed to serialize {entity_type} collection: {source}")]
    Serialization {
        entity_type: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Io { .. } => "STORAGE_IO_ERROR",
            StorageError::Serialization { .. } => "STORAGE_SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_category() {
        let err = TeahouseError::not_found("order", Uuid::nil());
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");

        let err: TeahouseError = RuleError::EmptyCart {
            user_id: Uuid::nil(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::BusinessRuleViolation);
        assert_eq!(err.error_code(), "EMPTY_CART");
    }

    #[test]
    fn test_display_mentions_identifiers() {
        let id = Uuid::new_v4();
        let err = TeahouseError::not_found("menu_item", id);
        assert_eq!(err.to_string(), format!("menu_item with id '{}' not found", id));
    }

    #[test]
    fn test_storage_error_keeps_source() {
        use std::error::Error as _;

        let err = StorageError::Io {
            path: PathBuf::from("/tmp/orders.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("orders.json"));
    }
}
