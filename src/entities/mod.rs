//! Aggregates persisted by the repositories

pub mod cart;
pub mod favorite;
pub mod line_item;
pub mod macros;
pub mod menu;
pub mod order;
pub mod promotion;
pub mod review;
pub mod user;

pub use cart::Cart;
pub use favorite::Favorite;
pub use line_item::{OrderItem, Sweetness};
pub use menu::{MenuItem, Topping};
pub use order::{Order, OrderStatus, TransitionPolicy};
pub use promotion::Promotion;
pub use review::{RATING_RANGE, Review};
pub use user::User;
