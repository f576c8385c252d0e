//! Menu items and toppings
//!
//! Both are copied by value into line items, so editing a menu entry never
//! changes what a customer already has in a cart or order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A drink on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: Uuid,
    pub name: String,
    /// Unit price, never negative
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub category: String,
    pub allow_toppings: bool,
    pub is_sold_out: bool,
    #[serde(default)]
    pub description: String,
}

impl MenuItem {
    /// Create an available item that accepts toppings
    pub fn new(name: impl Into<String>, price: Decimal, category: impl Into<String>) -> Self {
        Self {
            item_id: Uuid::new_v4(),
            name: name.into(),
            price,
            category: category.into(),
            allow_toppings: true,
            is_sold_out: false,
            description: String::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        !self.is_sold_out
    }
}

/// An add-on with an extra charge per drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topping {
    pub topping_id: Uuid,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub extra_price: Decimal,
}

impl Topping {
    pub fn new(name: impl Into<String>, extra_price: Decimal) -> Self {
        Self {
            topping_id: Uuid::new_v4(),
            name: name.into(),
            extra_price,
        }
    }
}

crate::impl_entity!(MenuItem, "menu_item", "menu_items", item_id);
crate::impl_entity!(Topping, "topping", "toppings", topping_id);
