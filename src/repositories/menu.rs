use crate::core::Repository;
use crate::entities::{MenuItem, Topping};

specialized_repository!(
    /// Menu items, including sold-out ones
    MenuItemRepository,
    MenuItem
);

specialized_repository!(ToppingRepository, Topping);

impl MenuItemRepository {
    /// Items that are not sold out, in menu order
    pub async fn find_available(&self) -> Vec<MenuItem> {
        self.find_where(&|item: &MenuItem| item.is_available()).await
    }
}
