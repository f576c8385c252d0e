//! Broadcast bus for order notifications
//!
//! The bus decouples the order lifecycle from whoever delivers messages to
//! customers (SMS gateway, push service, a test probe).
//!
//! ```text
//! OrderService ──▶ EventBusNotifier ──▶ EventBus::publish() ──▶ broadcast channel ──▶ subscribers
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! let bus = EventBus::new(256);
//! let mut rx = bus.subscribe();
//!
//! bus.publish(NotificationEvent::PickupReminder {
//!     order_id,
//!     user_id,
//! });
//!
//! if let Ok(envelope) = rx.recv().await {
//!     println!("{}", envelope.event.action());
//! }
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Customer-facing notifications raised by the order lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NotificationEvent {
    /// An order was placed
    OrderConfirmed {
        order_id: Uuid,
        user_id: Uuid,
        #[serde(with = "rust_decimal::serde::str")]
        total: Decimal,
    },
    /// An order is ready to be picked up
    PickupReminder { order_id: Uuid, user_id: Uuid },
    /// A completed order can now be reviewed
    ReviewInvitation { order_id: Uuid, user_id: Uuid },
}

impl NotificationEvent {
    /// Get the order this notification is about
    pub fn order_id(&self) -> Uuid {
        match self {
            NotificationEvent::OrderConfirmed { order_id, .. }
            | NotificationEvent::PickupReminder { order_id, .. }
            | NotificationEvent::ReviewInvitation { order_id, .. } => *order_id,
        }
    }

    /// Get the action name
    pub fn action(&self) -> &'static str {
        match self {
            NotificationEvent::OrderConfirmed { .. } => "order_confirmed",
            NotificationEvent::PickupReminder { .. } => "pickup_reminder",
            NotificationEvent::ReviewInvitation { .. } => "review_invitation",
        }
    }
}

/// Envelope wrapping a notification with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique event ID
    pub id: Uuid,
    /// When the event was published
    pub timestamp: DateTime<Utc>,
    /// The actual notification
    pub event: NotificationEvent,
}

impl EventEnvelope {
    /// Create a new event envelope
    pub fn new(event: NotificationEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event,
        }
    }
}

/// Broadcast-based event bus.
///
/// Cheap to clone and shareable across tasks.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventEnvelope>,
}

impl EventBus {
    /// Create a new EventBus with the given channel capacity
    ///
    /// Slow receivers lose the oldest events once `capacity` is exceeded.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish a notification to all subscribers.
    ///
    /// Never fails; returns the number of receivers reached (0 when nobody
    /// is listening).
    pub fn publish(&self, event: NotificationEvent) -> usize {
        let envelope = EventEnvelope::new(event);
        self.sender.send(envelope).unwrap_or(0)
    }

    /// Subscribe to future notifications
    pub fn subscribe(&self) -> broadcast::Receiver<EventEnvelope> {
        self.sender.subscribe()
    }

    /// Get the current number of active subscribers
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(256)
    }
}
