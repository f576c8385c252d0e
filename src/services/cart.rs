//! Shopping cart operations, one cart per user

use crate::core::{Repository, RuleError, TeahouseError};
use crate::entities::{Cart, OrderItem, Sweetness, Topping};
use crate::repositories::{CartRepository, MenuItemRepository, ToppingRepository};
use uuid::Uuid;

/// A drink to put in the cart
#[derive(Debug, Clone)]
pub struct AddToCart {
    pub item_id: Uuid,
    pub quantity: u32,
    pub sweetness: Sweetness,
    /// Unknown ids are skipped
    pub topping_ids: Vec<Uuid>,
    pub remark: String,
}

impl AddToCart {
    pub fn new(item_id: Uuid, quantity: u32) -> Self {
        Self {
            item_id,
            quantity,
            sweetness: Sweetness::default(),
            topping_ids: Vec::new(),
            remark: String::new(),
        }
    }

    pub fn sweetness(mut self, sweetness: Sweetness) -> Self {
        self.sweetness = sweetness;
        self
    }

    pub fn toppings(mut self, topping_ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.topping_ids = topping_ids.into_iter().collect();
        self
    }

    pub fn remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }
}

#[derive(Clone)]
pub struct CartService {
    carts: CartRepository,
    items: MenuItemRepository,
    toppings: ToppingRepository,
}

impl CartService {
    pub fn new(
        carts: CartRepository,
        items: MenuItemRepository,
        toppings: ToppingRepository,
    ) -> Self {
        Self {
            carts,
            items,
            toppings,
        }
    }

    /// The user's cart, created and persisted on first use
    pub async fn get_or_create_cart(&self, user_id: &Uuid) -> Result<Cart, TeahouseError> {
        let _guard = self.carts.write_lock().await;
        self.load_or_create(user_id).await
    }

    /// The user's cart without creating one
    pub async fn get_cart(&self, user_id: &Uuid) -> Option<Cart> {
        self.carts.find_by_user(user_id).await
    }

    pub async fn add_to_cart(
        &self,
        user_id: &Uuid,
        request: AddToCart,
    ) -> Result<Cart, TeahouseError> {
        let item = self
            .items
            .find_by_id(&request.item_id)
            .await
            .ok_or_else(|| TeahouseError::not_found("menu_item", request.item_id))?;

        if !item.is_available() {
            return Err(RuleError::Unavailable {
                item_id: item.item_id,
                name: item.name,
            }
            .into());
        }

        let mut toppings: Vec<Topping> = Vec::with_capacity(request.topping_ids.len());
        for topping_id in &request.topping_ids {
            match self.toppings.find_by_id(topping_id).await {
                Some(topping) => toppings.push(topping),
                None => tracing::debug!(topping_id = %topping_id, "Skipping unknown topping"),
            }
        }

        let line = OrderItem::new(
            &item,
            request.quantity,
            request.sweetness,
            &toppings,
            request.remark,
        )?;

        let _guard = self.carts.write_lock().await;
        let mut cart = self.load_or_create(user_id).await?;
        cart.add_item(line);
        let cart = self.carts.save(cart).await?;

        tracing::debug!(
            user_id = %user_id,
            item_id = %item.item_id,
            quantity = request.quantity,
            "Added to cart"
        );
        Ok(cart)
    }

    /// Remove one line; a missing cart or line is a no-op
    pub async fn remove_from_cart(
        &self,
        user_id: &Uuid,
        order_item_id: &Uuid,
    ) -> Result<(), TeahouseError> {
        let _guard = self.carts.write_lock().await;
        if let Some(mut cart) = self.carts.find_by_user(user_id).await {
            if cart.remove_item(order_item_id) {
                self.carts.save(cart).await?;
            }
        }
        Ok(())
    }

    /// Set a line's quantity; zero or less removes the line.
    ///
    /// A quantity that does not fit on a line fails with `InvalidQuantity`.
    pub async fn update_quantity(
        &self,
        user_id: &Uuid,
        order_item_id: &Uuid,
        quantity: i64,
    ) -> Result<(), TeahouseError> {
        let _guard = self.carts.write_lock().await;
        if let Some(mut cart) = self.carts.find_by_user(user_id).await {
            if cart.update_quantity(order_item_id, quantity)? {
                self.carts.save(cart).await?;
            }
        }
        Ok(())
    }

    pub async fn clear_cart(&self, user_id: &Uuid) -> Result<(), TeahouseError> {
        let _guard = self.carts.write_lock().await;
        self.clear_unlocked(user_id).await
    }

    /// Empty the cart; the caller holds the carts write lock
    pub(crate) async fn clear_unlocked(&self, user_id: &Uuid) -> Result<(), TeahouseError> {
        if let Some(mut cart) = self.carts.find_by_user(user_id).await {
            if !cart.is_empty() {
                cart.clear();
                self.carts.save(cart).await?;
            }
        }
        Ok(())
    }

    pub(crate) fn carts(&self) -> &CartRepository {
        &self.carts
    }

    async fn load_or_create(&self, user_id: &Uuid) -> Result<Cart, TeahouseError> {
        if let Some(cart) = self.carts.find_by_user(user_id).await {
            return Ok(cart);
        }
        let cart = self.carts.save(Cart::new(*user_id)).await?;
        tracing::debug!(user_id = %user_id, cart_id = %cart.cart_id, "Cart created");
        Ok(cart)
    }
}
