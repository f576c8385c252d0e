use crate::core::{Repository, newest_first};
use crate::entities::{Order, OrderStatus};
use uuid::Uuid;

specialized_repository!(
    /// Placed orders
    OrderRepository,
    Order
);

impl OrderRepository {
    /// Orders of one user, in storage order
    pub async fn find_by_user(&self, user_id: &Uuid) -> Vec<Order> {
        self.find_where(&|order: &Order| &order.user_id() == user_id)
            .await
    }

    pub async fn find_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.find_where(&|order: &Order| order.status() == status)
            .await
    }

    /// Every order, newest first
    pub async fn find_all_sorted_by_time(&self) -> Vec<Order> {
        newest_first(self.find_all().await)
    }

    /// The order placed from a cart snapshot, if any
    pub async fn find_by_placement_key(&self, key: &Uuid) -> Option<Order> {
        self.find_one_where(&|order: &Order| order.placement_key().as_ref() == Some(key))
            .await
    }
}
