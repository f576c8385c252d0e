use crate::core::{Repository, newest_first};
use crate::entities::{Favorite, Review};
use uuid::Uuid;

specialized_repository!(ReviewRepository, Review);
specialized_repository!(FavoriteRepository, Favorite);

impl ReviewRepository {
    pub async fn find_by_user(&self, user_id: &Uuid) -> Vec<Review> {
        self.find_where(&|review: &Review| &review.user_id == user_id)
            .await
    }

    pub async fn find_by_order(&self, order_id: &Uuid) -> Vec<Review> {
        self.find_where(&|review: &Review| &review.order_id == order_id)
            .await
    }

    /// Every review, newest first
    pub async fn find_all_sorted(&self) -> Vec<Review> {
        newest_first(self.find_all().await)
    }
}

impl FavoriteRepository {
    pub async fn find_by_user(&self, user_id: &Uuid) -> Vec<Favorite> {
        self.find_where(&|fav: &Favorite| &fav.user_id == user_id)
            .await
    }

    pub async fn find_by_user_and_item(&self, user_id: &Uuid, item_id: &Uuid) -> Option<Favorite> {
        self.find_one_where(&|fav: &Favorite| &fav.user_id == user_id && &fav.item_id == item_id)
            .await
    }
}
