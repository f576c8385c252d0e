//! Customer notifications raised by the order lifecycle
//!
//! Delivery is fire-and-forget: the order service logs a failed
//! notification and carries on.

use crate::core::{EventBus, NotificationEvent};
use crate::entities::Order;
use anyhow::{Result, bail};
use async_trait::async_trait;

/// Delivers order notifications to the customer
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A new order was placed
    async fn order_confirmed(&self, order: &Order) -> Result<()>;

    /// The order entered READY
    async fn pickup_reminder(&self, order: &Order) -> Result<()>;

    /// The order entered COMPLETED
    async fn invite_review(&self, order: &Order) -> Result<()>;
}

/// Writes every notification to the log
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn order_confirmed(&self, order: &Order) -> Result<()> {
        tracing::info!(
            order_id = %order.order_id(),
            user_id = %order.user_id(),
            total = %order.total_amount(),
            "Order confirmed"
        );
        Ok(())
    }

    async fn pickup_reminder(&self, order: &Order) -> Result<()> {
        tracing::info!(
            order_id = %order.order_id(),
            user_id = %order.user_id(),
            "Order ready for pickup"
        );
        Ok(())
    }

    async fn invite_review(&self, order: &Order) -> Result<()> {
        tracing::info!(
            order_id = %order.order_id(),
            user_id = %order.user_id(),
            "Review invitation sent"
        );
        Ok(())
    }
}

/// Publishes notifications on an [`EventBus`]
///
/// Publishing with nobody subscribed is reported as an error so the caller
/// can log the undelivered message.
#[derive(Debug, Clone)]
pub struct EventBusNotifier {
    bus: EventBus,
}

impl EventBusNotifier {
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    fn publish(&self, event: NotificationEvent) -> Result<()> {
        let action = event.action();
        let order_id = event.order_id();
        if self.bus.publish(event) == 0 {
            bail!("no subscriber received {action} for order {order_id}");
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for EventBusNotifier {
    async fn order_confirmed(&self, order: &Order) -> Result<()> {
        self.publish(NotificationEvent::OrderConfirmed {
            order_id: order.order_id(),
            user_id: order.user_id(),
            total: order.total_amount(),
        })
    }

    async fn pickup_reminder(&self, order: &Order) -> Result<()> {
        self.publish(NotificationEvent::PickupReminder {
            order_id: order.order_id(),
            user_id: order.user_id(),
        })
    }

    async fn invite_review(&self, order: &Order) -> Result<()> {
        self.publish(NotificationEvent::ReviewInvitation {
            order_id: order.order_id(),
            user_id: order.user_id(),
        })
    }
}
