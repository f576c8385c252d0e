use crate::core::{Repository, RuleError, TeahouseError};
use crate::entities::Favorite;
use crate::repositories::FavoriteRepository;
use uuid::Uuid;

/// Saved menu items, at most one per (user, item) pair
#[derive(Clone)]
pub struct FavoriteService {
    favorites: FavoriteRepository,
}

impl FavoriteService {
    pub fn new(favorites: FavoriteRepository) -> Self {
        Self { favorites }
    }

    pub async fn add_favorite(
        &self,
        user_id: &Uuid,
        item_id: &Uuid,
    ) -> Result<Favorite, TeahouseError> {
        let _guard = self.favorites.write_lock().await;
        if self
            .favorites
            .find_by_user_and_item(user_id, item_id)
            .await
            .is_some()
        {
            return Err(RuleError::AlreadyFavorited {
                user_id: *user_id,
                item_id: *item_id,
            }
            .into());
        }

        Ok(self.favorites.save(Favorite::new(*user_id, *item_id)).await?)
    }

    pub async fn remove_favorite(
        &self,
        user_id: &Uuid,
        item_id: &Uuid,
    ) -> Result<(), TeahouseError> {
        let _guard = self.favorites.write_lock().await;
        let favorite = self
            .favorites
            .find_by_user_and_item(user_id, item_id)
            .await
            .ok_or(RuleError::NotFavorited {
                user_id: *user_id,
                item_id: *item_id,
            })?;

        self.favorites.delete(&favorite.favorite_id).await?;
        Ok(())
    }

    pub async fn list_favorites(&self, user_id: &Uuid) -> Vec<Favorite> {
        self.favorites.find_by_user(user_id).await
    }

    pub async fn is_favorited(&self, user_id: &Uuid, item_id: &Uuid) -> bool {
        self.favorites
            .find_by_user_and_item(user_id, item_id)
            .await
            .is_some()
    }
}
