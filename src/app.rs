//! Wiring of repositories, notifier and services from an [`AppConfig`]

use crate::config::{AppConfig, NotificationSink};
use crate::core::{EventBus, StorageError};
use crate::notify::{EventBusNotifier, Notifier, TracingNotifier};
use crate::repositories::{
    CartRepository, FavoriteRepository, MenuItemRepository, OrderRepository, PromotionRepository,
    ReviewRepository, ToppingRepository, UserRepository,
};
use crate::services::{
    AuthService, CartService, FavoriteService, MenuService, OrderService, PromotionService,
    ReviewService,
};
use crate::storage::open_repository;
use std::sync::Arc;

/// Every service of the shop, sharing one set of repositories.
///
/// # Example
///
/// ```rust,ignore
/// let shop = Teahouse::open(&AppConfig::from_yaml_file("teahouse.yaml")?).await?;
/// let session = shop.auth.login("13512345678").await?;
/// let order = shop.orders.place_order(&session.user_id(), "").await?;
/// ```
#[derive(Clone)]
pub struct Teahouse {
    pub auth: AuthService,
    pub menu: MenuService,
    pub carts: CartService,
    pub orders: OrderService,
    pub reviews: ReviewService,
    pub favorites: FavoriteService,
    pub promotions: PromotionService,
    events: Option<EventBus>,
}

impl Teahouse {
    /// Open every repository and build the services.
    ///
    /// Fails only when the data directory cannot be created; unreadable
    /// documents open empty.
    pub async fn open(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = &config.storage;
        tracing::info!(
            backend = ?storage.backend,
            data_dir = %storage.data_dir.display(),
            transitions = ?config.orders.transitions,
            "Opening teahouse"
        );

        let users = UserRepository::new(open_repository(storage).await?);
        let items = MenuItemRepository::new(open_repository(storage).await?);
        let toppings = ToppingRepository::new(open_repository(storage).await?);
        let carts = CartRepository::new(open_repository(storage).await?);
        let orders = OrderRepository::new(open_repository(storage).await?);
        let reviews = ReviewRepository::new(open_repository(storage).await?);
        let favorites = FavoriteRepository::new(open_repository(storage).await?);
        let promotions = PromotionRepository::new(open_repository(storage).await?);

        let (notifier, events): (Arc<dyn Notifier>, Option<EventBus>) =
            match config.notifications.sink {
                NotificationSink::Log => (Arc::new(TracingNotifier), None),
                NotificationSink::EventBus => {
                    let bus = EventBus::new(config.notifications.channel_capacity);
                    (Arc::new(EventBusNotifier::new(bus.clone())), Some(bus))
                }
            };

        let cart_service = CartService::new(carts, items.clone(), toppings.clone());

        Ok(Self {
            auth: AuthService::new(users),
            menu: MenuService::new(items, toppings),
            orders: OrderService::new(
                orders,
                cart_service.clone(),
                notifier,
                config.orders.transitions,
            ),
            carts: cart_service,
            reviews: ReviewService::new(reviews),
            favorites: FavoriteService::new(favorites),
            promotions: PromotionService::new(promotions),
            events,
        })
    }

    /// Nothing persisted, notifications logged
    pub async fn in_memory() -> Result<Self, StorageError> {
        Self::open(&AppConfig::in_memory()).await
    }

    /// The notification bus, when the `event_bus` sink is configured
    pub fn events(&self) -> Option<&EventBus> {
        self.events.as_ref()
    }
}
