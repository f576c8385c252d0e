//! Business operations over the repositories
//!
//! Every operation returns `Result<T, TeahouseError>`; read-modify-write
//! sequences run under the repository's `write_lock()`.

pub mod auth;
pub mod cart;
pub mod favorite;
pub mod menu;
pub mod order;
pub mod promotion;
pub mod review;

pub use auth::{AuthService, Registration, Session};
pub use cart::{AddToCart, CartService};
pub use favorite::FavoriteService;
pub use menu::{MAX_PRICE, MenuItemPatch, MenuService, NewMenuItem, NewTopping};
pub use order::OrderService;
pub use promotion::{PromotionPatch, PromotionService};
pub use review::ReviewService;
