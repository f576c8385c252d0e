use crate::core::error::InputError;
use crate::entities::OrderItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's cart. Each user owns at most one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub cart_id: Uuid,
    pub user_id: Uuid,
    /// Insertion order is kept for display
    pub items: Vec<OrderItem>,
}

impl Cart {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            cart_id: Uuid::new_v4(),
            user_id,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Remove a line, returning whether it was present
    pub fn remove_item(&mut self, order_item_id: &Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.order_item_id != order_item_id);
        self.items.len() != before
    }

    /// Set the quantity of a line; zero or less removes it.
    ///
    /// Returns whether a line was touched. A quantity too large for a line
    /// is rejected and leaves the cart unchanged.
    pub fn update_quantity(
        &mut self,
        order_item_id: &Uuid,
        quantity: i64,
    ) -> Result<bool, InputError> {
        if quantity <= 0 {
            return Ok(self.remove_item(order_item_id));
        }
        let quantity = u32::try_from(quantity).map_err(|_| InputError::InvalidQuantity { quantity })?;

        match self
            .items
            .iter_mut()
            .find(|item| &item.order_item_id == order_item_id)
        {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line subtotal
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }

    /// Deterministic key of the current contents.
    ///
    /// Derived from the cart id and each line's id and quantity, so two
    /// placement attempts on an unchanged cart yield the same key.
    pub fn snapshot_key(&self) -> Uuid {
        let mut name = Vec::with_capacity(self.items.len() * 20);
        for item in &self.items {
            name.extend_from_slice(item.order_item_id.as_bytes());
            name.extend_from_slice(&item.quantity.to_le_bytes());
        }
        Uuid::new_v5(&self.cart_id, &name)
    }
}

crate::impl_entity!(Cart, "cart", "carts", cart_id);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{MenuItem, Sweetness, Topping};

    fn line(price: i64, quantity: u32, toppings: &[Topping]) -> OrderItem {
        let item = MenuItem::new("drink", Decimal::new(price, 2), "tea");
        OrderItem::new(&item, quantity, Sweetness::Five, toppings, "").unwrap()
    }

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let mut cart = Cart::new(Uuid::new_v4());
        let beans = Topping::new("Red Bean", Decimal::new(300, 2));
        cart.add_item(line(1200, 1, &[]));
        cart.add_item(line(1600, 2, &[beans]));

        let expected: Decimal = cart.items.iter().map(OrderItem::subtotal).sum();
        assert_eq!(cart.total(), expected);
        assert_eq!(cart.total(), Decimal::new(5000, 2));
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new(Uuid::new_v4());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_update_quantity_non_positive_removes_line() {
        let mut cart = Cart::new(Uuid::new_v4());
        cart.add_item(line(1200, 1, &[]));
        let id = cart.items[0].order_item_id;

        assert!(cart.update_quantity(&id, 3).unwrap());
        assert_eq!(cart.items[0].quantity, 3);

        assert!(cart.update_quantity(&id, 0).unwrap());
        assert!(cart.is_empty());

        assert!(!cart.update_quantity(&id, -2).unwrap());
    }

    #[test]
    fn test_update_quantity_beyond_line_capacity_is_rejected() {
        let mut cart = Cart::new(Uuid::new_v4());
        cart.add_item(line(1200, 2, &[]));
        let id = cart.items[0].order_item_id;

        let err = cart.update_quantity(&id, 5_000_000_000).unwrap_err();
        assert!(matches!(err, InputError::InvalidQuantity { quantity: 5_000_000_000 }));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);

        assert!(cart.update_quantity(&id, i64::from(u32::MAX)).unwrap());
        assert_eq!(cart.items[0].quantity, u32::MAX);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::new(Uuid::new_v4());
        cart.add_item(line(1200, 1, &[]));
        assert!(!cart.remove_item(&Uuid::new_v4()));
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn test_snapshot_key_tracks_contents() {
        let mut cart = Cart::new(Uuid::new_v4());
        cart.add_item(line(1200, 1, &[]));
        let key = cart.snapshot_key();
        assert_eq!(key, cart.snapshot_key());

        let id = cart.items[0].order_item_id;
        cart.update_quantity(&id, 2).unwrap();
        assert_ne!(key, cart.snapshot_key());
    }
}
