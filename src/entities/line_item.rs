use crate::core::error::InputError;
use crate::entities::{MenuItem, Topping};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Sugar level requested for a drink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Sweetness {
    None,
    Three,
    #[default]
    Five,
    Seven,
    Full,
}

impl Sweetness {
    pub const ALL: [Sweetness; 5] = [
        Sweetness::None,
        Sweetness::Three,
        Sweetness::Five,
        Sweetness::Seven,
        Sweetness::Full,
    ];
}

impl fmt::Display for Sweetness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sweetness::None => write!(f, "no sugar"),
            Sweetness::Three => write!(f, "30% sugar"),
            Sweetness::Five => write!(f, "50% sugar"),
            Sweetness::Seven => write!(f, "70% sugar"),
            Sweetness::Full => write!(f, "full sugar"),
        }
    }
}

/// One line of a cart or order.
///
/// Holds snapshots of the menu item and toppings as they were when the line
/// was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: Uuid,
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub sweetness: Sweetness,
    pub toppings: Vec<Topping>,
    #[serde(default)]
    pub remark: String,
}

impl OrderItem {
    /// Build a line from snapshots of `menu_item` and `toppings`.
    ///
    /// A zero quantity is rejected: it is a removal signal and is never
    /// stored on a line.
    pub fn new(
        menu_item: &MenuItem,
        quantity: u32,
        sweetness: Sweetness,
        toppings: &[Topping],
        remark: impl Into<String>,
    ) -> Result<Self, InputError> {
        if quantity == 0 {
            return Err(InputError::InvalidQuantity { quantity: 0 });
        }

        Ok(Self {
            order_item_id: Uuid::new_v4(),
            menu_item: menu_item.clone(),
            quantity,
            sweetness,
            toppings: toppings.to_vec(),
            remark: remark.into(),
        })
    }

    /// Base price plus every topping, for a single drink
    pub fn unit_price(&self) -> Decimal {
        self.menu_item.price
            + self
                .toppings
                .iter()
                .map(|t| t.extra_price)
                .sum::<Decimal>()
    }

    /// `(base_price + Σ topping prices) × quantity`
    pub fn subtotal(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity)
    }
}
