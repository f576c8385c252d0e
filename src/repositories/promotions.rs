use crate::core::Repository;
use crate::entities::Promotion;
use chrono::{DateTime, Utc};

specialized_repository!(PromotionRepository, Promotion);

impl PromotionRepository {
    /// Promotions valid at `now`, evaluated at read time
    pub async fn find_active_at(&self, now: DateTime<Utc>) -> Vec<Promotion> {
        self.find_where(&|promo: &Promotion| promo.is_valid_at(now))
            .await
    }
}
