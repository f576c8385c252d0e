//! # Teahouse
//!
//! Ordering core of a milk-tea shop: menu, carts, orders with a status
//! state machine, reviews, favorites and promotions, persisted as one JSON
//! document per entity kind.
//!
//! ## Features
//!
//! - **Snapshot line items**: carts and orders copy menu items and toppings by value
//! - **Order state machine**: strict or permissive transitions, chosen in config
//! - **Idempotent checkout**: retrying a placement never duplicates an order
//! - **Pluggable storage**: JSON documents or in-memory, behind one `Repository` trait
//! - **Notifications**: order confirmations, pickup reminders and review invitations
//!   to the log or an in-process event bus
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use teahouse::prelude::*;
//!
//! let shop = Teahouse::open(&AppConfig::json_in("data")).await?;
//!
//! let oolong = shop
//!     .menu
//!     .create_item(NewMenuItem::new("Oolong", Decimal::new(1200, 2), "tea"))
//!     .await?;
//! shop.auth.register(Registration::new("Wang", "13512345678")).await?;
//! let session = shop.auth.login("13512345678").await?;
//!
//! shop.carts
//!     .add_to_cart(&session.user_id(), AddToCart::new(oolong.item_id, 2))
//!     .await?;
//! let order = shop.orders.place_order(&session.user_id(), "less ice").await?;
//! shop.orders.update_status(&order.order_id(), OrderStatus::Preparing).await?;
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod notify;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use app::Teahouse;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Entity, EntityError, ErrorKind, EventBus, EventEnvelope, InputError, NotificationEvent,
        Outcome, Repository, RuleError, StorageError, TeahouseError, Timestamped,
    };

    // === Entities ===
    pub use crate::entities::{
        Cart, Favorite, MenuItem, Order, OrderItem, OrderStatus, Promotion, Review, Sweetness,
        Topping, TransitionPolicy, User,
    };

    // === Services ===
    pub use crate::services::{
        AddToCart, AuthService, CartService, FavoriteService, MAX_PRICE, MenuItemPatch,
        MenuService, NewMenuItem, NewTopping, OrderService, PromotionPatch, PromotionService,
        Registration, ReviewService, Session,
    };

    // === Wiring ===
    pub use crate::app::Teahouse;
    pub use crate::config::{AppConfig, NotificationSink, StorageBackend};
    pub use crate::notify::{EventBusNotifier, Notifier, TracingNotifier};
    pub use crate::storage::{InMemoryRepository, JsonFileRepository};

    // === Re-exports ===
    pub use chrono::{DateTime, Utc};
    pub use rust_decimal::Decimal;
    pub use uuid::Uuid;
}
