use crate::core::Repository;
use crate::entities::Cart;
use uuid::Uuid;

specialized_repository!(CartRepository, Cart);

impl CartRepository {
    pub async fn find_by_user(&self, user_id: &Uuid) -> Option<Cart> {
        self.find_one_where(&|cart: &Cart| &cart.user_id == user_id)
            .await
    }
}
