//! Per-entity query helpers layered over the generic repository.
//!
//! Each wrapper derefs to `dyn Repository<T>`, so `save`, `find_by_id`,
//! `delete` and `write_lock` are called on it directly. The extra queries
//! read the current snapshot and cache nothing.

/// Define a cloneable wrapper around `Arc<dyn Repository<$entity>>`
macro_rules! specialized_repository {
    ($(#[$meta:meta])* $name:ident, $entity:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            inner: ::std::sync::Arc<dyn $crate::core::Repository<$entity>>,
        }

        impl $name {
            pub fn new(inner: ::std::sync::Arc<dyn $crate::core::Repository<$entity>>) -> Self {
                Self { inner }
            }
        }

        impl ::std::ops::Deref for $name {
            type Target = dyn $crate::core::Repository<$entity>;

            fn deref(&self) -> &Self::Target {
                self.inner.as_ref()
            }
        }
    };
}

mod carts;
mod feedback;
mod menu;
mod orders;
mod promotions;
mod users;

pub use carts::CartRepository;
pub use feedback::{FavoriteRepository, ReviewRepository};
pub use menu::{MenuItemRepository, ToppingRepository};
pub use orders::OrderRepository;
pub use promotions::PromotionRepository;
pub use users::UserRepository;
