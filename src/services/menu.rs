//! Menu and topping management

use crate::core::{InputError, Repository, TeahouseError};
use crate::entities::{MenuItem, Topping};
use crate::repositories::{MenuItemRepository, ToppingRepository};
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

/// Highest price accepted for a menu item or topping
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Shared bound for every price entering the menu.
///
/// Line subtotals and order totals are computed from these values, so the
/// ceiling keeps them far from `Decimal` overflow.
fn check_price(field: &'static str, value: Decimal) -> Result<(), InputError> {
    if value < Decimal::ZERO {
        return Err(InputError::NegativePrice { field, value });
    }
    if value > MAX_PRICE {
        return Err(InputError::PriceTooHigh {
            field,
            value,
            max: MAX_PRICE,
        });
    }
    Ok(())
}

/// Draft of a new menu item
#[derive(Debug, Clone, Validate)]
pub struct NewMenuItem {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub allow_toppings: bool,
    pub description: String,
}

impl NewMenuItem {
    pub fn new(name: impl Into<String>, price: Decimal, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            allow_toppings: true,
            description: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn without_toppings(mut self) -> Self {
        self.allow_toppings = false;
        self
    }
}

/// Draft of a new topping
#[derive(Debug, Clone, Validate)]
pub struct NewTopping {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    pub extra_price: Decimal,
}

impl NewTopping {
    pub fn new(name: impl Into<String>, extra_price: Decimal) -> Self {
        Self {
            name: name.into(),
            extra_price,
        }
    }
}

/// Partial update of a menu item; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub allow_toppings: Option<bool>,
    pub description: Option<String>,
}

impl MenuItemPatch {
    fn apply(self, item: &mut MenuItem) -> Result<(), TeahouseError> {
        if let Some(name) = self.name {
            if name.trim().is_empty() {
                return Err(InputError::Validation("name: must not be empty".into()).into());
            }
            item.name = name;
        }
        if let Some(price) = self.price {
            check_price("price", price)?;
            item.price = price;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(allow_toppings) = self.allow_toppings {
            item.allow_toppings = allow_toppings;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct MenuService {
    items: MenuItemRepository,
    toppings: ToppingRepository,
}

impl MenuService {
    pub fn new(items: MenuItemRepository, toppings: ToppingRepository) -> Self {
        Self { items, toppings }
    }

    /// Items a customer can order right now
    pub async fn list_items(&self) -> Vec<MenuItem> {
        self.items.find_available().await
    }

    pub async fn list_all_items(&self) -> Vec<MenuItem> {
        self.items.find_all().await
    }

    pub async fn get_item(&self, item_id: &Uuid) -> Result<MenuItem, TeahouseError> {
        self.items
            .find_by_id(item_id)
            .await
            .ok_or_else(|| TeahouseError::not_found("menu_item", *item_id))
    }

    pub async fn create_item(&self, draft: NewMenuItem) -> Result<MenuItem, TeahouseError> {
        draft.validate()?;
        check_price("price", draft.price)?;

        let mut item = MenuItem::new(draft.name, draft.price, draft.category);
        item.allow_toppings = draft.allow_toppings;
        item.description = draft.description;

        let item = self.items.save(item).await?;
        tracing::info!(item_id = %item.item_id, name = %item.name, "Menu item created");
        Ok(item)
    }

    pub async fn update_item(
        &self,
        item_id: &Uuid,
        patch: MenuItemPatch,
    ) -> Result<MenuItem, TeahouseError> {
        let _guard = self.items.write_lock().await;
        let mut item = self.get_item(item_id).await?;
        patch.apply(&mut item)?;
        Ok(self.items.save(item).await?)
    }

    pub async fn mark_sold_out(
        &self,
        item_id: &Uuid,
        is_sold_out: bool,
    ) -> Result<MenuItem, TeahouseError> {
        let _guard = self.items.write_lock().await;
        let mut item = self.get_item(item_id).await?;
        item.is_sold_out = is_sold_out;

        let item = self.items.save(item).await?;
        tracing::info!(item_id = %item.item_id, is_sold_out, "Menu item availability changed");
        Ok(item)
    }

    /// Returns `false` when no such item exists
    pub async fn delete_item(&self, item_id: &Uuid) -> Result<bool, TeahouseError> {
        let _guard = self.items.write_lock().await;
        Ok(self.items.delete(item_id).await?)
    }

    pub async fn list_toppings(&self) -> Vec<Topping> {
        self.toppings.find_all().await
    }

    pub async fn get_topping(&self, topping_id: &Uuid) -> Result<Topping, TeahouseError> {
        self.toppings
            .find_by_id(topping_id)
            .await
            .ok_or_else(|| TeahouseError::not_found("topping", *topping_id))
    }

    pub async fn create_topping(&self, draft: NewTopping) -> Result<Topping, TeahouseError> {
        draft.validate()?;
        check_price("extra_price", draft.extra_price)?;
        let topping = self
            .toppings
            .save(Topping::new(draft.name, draft.extra_price))
            .await?;
        tracing::info!(topping_id = %topping.topping_id, "Topping created");
        Ok(topping)
    }

    pub async fn delete_topping(&self, topping_id: &Uuid) -> Result<bool, TeahouseError> {
        let _guard = self.toppings.write_lock().await;
        Ok(self.toppings.delete(topping_id).await?)
    }
}
