//! Order placement and the status state machine
//!
//! ```text
//! PENDING ──▶ PREPARING ──▶ READY ──▶ COMPLETED
//!    │            │           │
//!    └────────────┴───────────┴──▶ CANCELLED
//! ```

use crate::core::{Repository, RuleError, TeahouseError, newest_first};
use crate::entities::{Order, OrderStatus, TransitionPolicy};
use crate::notify::Notifier;
use crate::repositories::OrderRepository;
use crate::services::CartService;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct OrderService {
    orders: OrderRepository,
    carts: CartService,
    notifier: Arc<dyn Notifier>,
    policy: TransitionPolicy,
}

impl OrderService {
    pub fn new(
        orders: OrderRepository,
        carts: CartService,
        notifier: Arc<dyn Notifier>,
        policy: TransitionPolicy,
    ) -> Self {
        Self {
            orders,
            carts,
            notifier,
            policy,
        }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Turn the user's cart into a pending order and empty the cart.
    ///
    /// Retrying after a failure between saving the order and clearing the
    /// cart returns the order already placed instead of a duplicate. The
    /// retry writes that order again and sends the confirmation the failed
    /// attempt never reached.
    pub async fn place_order(
        &self,
        user_id: &Uuid,
        remark: impl Into<String>,
    ) -> Result<Order, TeahouseError> {
        let (order, replayed) = {
            // Lock order: orders, then carts
            let _orders_guard = self.orders.write_lock().await;
            let _carts_guard = self.carts.carts().write_lock().await;

            let cart = match self.carts.carts().find_by_user(user_id).await {
                Some(cart) if !cart.is_empty() => cart,
                _ => return Err(RuleError::EmptyCart { user_id: *user_id }.into()),
            };

            let key = cart.snapshot_key();
            let (order, replayed) = match self.orders.find_by_placement_key(&key).await {
                Some(existing) => {
                    tracing::warn!(
                        order_id = %existing.order_id(),
                        user_id = %user_id,
                        "Cart was already placed, completing that placement"
                    );
                    (existing, true)
                }
                None => (Order::from_cart(&cart, remark), false),
            };

            // A replayed order may have reached memory but not storage
            let order = self.orders.save(order).await?;
            self.carts.clear_unlocked(user_id).await?;
            (order, replayed)
        };

        tracing::info!(
            order_id = %order.order_id(),
            user_id = %user_id,
            total = %order.total_amount(),
            lines = order.items().len(),
            replayed,
            "Order placed"
        );
        // Confirmation follows the cart clear, so a replayed placement was never confirmed
        if let Err(e) = self.notifier.order_confirmed(&order).await {
            tracing::warn!(
                order_id = %order.order_id(),
                error = %e,
                "Order confirmation not delivered"
            );
        }

        Ok(order)
    }

    /// Move an order to `status` under the configured transition policy.
    ///
    /// Entering READY sends a pickup reminder and entering COMPLETED a
    /// review invitation. A failed notification is logged and the status
    /// change stands.
    pub async fn update_status(
        &self,
        order_id: &Uuid,
        status: OrderStatus,
    ) -> Result<Order, TeahouseError> {
        let (order, previous) = {
            let _guard = self.orders.write_lock().await;
            let mut order = self.get_order(order_id).await?;
            let previous = order.transition_to(status, self.policy)?;
            (self.orders.save(order).await?, previous)
        };

        tracing::info!(
            order_id = %order_id,
            from = %previous,
            to = %status,
            "Order status changed"
        );

        if previous != status {
            let delivery = match status {
                OrderStatus::Ready => Some(self.notifier.pickup_reminder(&order).await),
                OrderStatus::Completed => Some(self.notifier.invite_review(&order).await),
                _ => None,
            };
            if let Some(Err(e)) = delivery {
                tracing::warn!(
                    order_id = %order_id,
                    status = %status,
                    error = %e,
                    "Notification not delivered"
                );
            }
        }

        Ok(order)
    }

    pub async fn cancel_order(&self, order_id: &Uuid) -> Result<Order, TeahouseError> {
        self.update_status(order_id, OrderStatus::Cancelled).await
    }

    /// Orders newest first, optionally restricted to one user
    pub async fn list_orders(&self, user_id: Option<&Uuid>) -> Vec<Order> {
        match user_id {
            Some(user_id) => newest_first(self.orders.find_by_user(user_id).await),
            None => self.orders.find_all_sorted_by_time().await,
        }
    }

    pub async fn get_order(&self, order_id: &Uuid) -> Result<Order, TeahouseError> {
        self.orders
            .find_by_id(order_id)
            .await
            .ok_or_else(|| TeahouseError::not_found("order", *order_id))
    }

    pub async fn list_by_status(&self, status: OrderStatus) -> Vec<Order> {
        self.orders.find_by_status(status).await
    }
}
