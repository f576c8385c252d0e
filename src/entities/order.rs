//! Orders and their status state machine
//!
//! ```text
//! PENDING ──▶ PREPARING ──▶ READY ──▶ COMPLETED
//!    │            │           │
//!    └────────────┴───────────┴──▶ CANCELLED
//! ```
//!
//! `COMPLETED` and `CANCELLED` are terminal. Whether these edges are
//! enforced is decided by [`TransitionPolicy`].

use crate::core::error::RuleError;
use crate::entities::{Cart, OrderItem};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether `next` is an edge of the state machine
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        match (self, next) {
            (Pending, Preparing) | (Preparing, Ready) | (Ready, Completed) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "PREPARING" => Ok(OrderStatus::Preparing),
            "READY" => Ok(OrderStatus::Ready),
            "COMPLETED" => Ok(OrderStatus::Completed),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// How strictly status updates follow the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only the edges of the state machine are accepted
    #[default]
    Strict,
    /// Any status may overwrite any other
    Permissive,
}

impl TransitionPolicy {
    pub fn allows(self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Strict => from.can_transition_to(to),
            TransitionPolicy::Permissive => true,
        }
    }
}

/// A placed order.
///
/// The line items are frozen at placement; only the status changes
/// afterwards, which is why the fields are private.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: Uuid,
    user_id: Uuid,
    status: OrderStatus,
    items: Vec<OrderItem>,
    #[serde(default)]
    remark: String,
    created_at: DateTime<Utc>,
    /// Snapshot key of the cart this order was placed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    placement_key: Option<Uuid>,
}

impl Order {
    /// Create a pending order from a deep copy of the cart's lines
    pub fn from_cart(cart: &Cart, remark: impl Into<String>) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            user_id: cart.user_id,
            status: OrderStatus::Pending,
            items: cart.items.clone(),
            remark: remark.into(),
            created_at: Utc::now(),
            placement_key: Some(cart.snapshot_key()),
        }
    }

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }

    pub fn placement_key(&self) -> Option<Uuid> {
        self.placement_key
    }

    pub fn total_amount(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Move to `next` if the policy allows it, returning the previous status
    pub fn transition_to(
        &mut self,
        next: OrderStatus,
        policy: TransitionPolicy,
    ) -> Result<OrderStatus, RuleError> {
        if !policy.allows(self.status, next) {
            return Err(RuleError::IllegalTransition {
                order_id: self.order_id,
                from: self.status,
                to: next,
            });
        }

        Ok(std::mem::replace(&mut self.status, next))
    }
}

crate::impl_entity!(Order, "order", "orders", order_id, timestamped);
