use crate::core::{InputError, Repository, TeahouseError};
use crate::entities::Promotion;
use crate::repositories::PromotionRepository;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Partial update of a promotion; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct PromotionPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone)]
pub struct PromotionService {
    promotions: PromotionRepository,
}

impl PromotionService {
    pub fn new(promotions: PromotionRepository) -> Self {
        Self { promotions }
    }

    pub async fn create_promotion(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        start_at: DateTime<Utc>,
        end_at: DateTime<Utc>,
    ) -> Result<Promotion, TeahouseError> {
        if end_at < start_at {
            return Err(InputError::InvalidWindow {
                start: start_at,
                end: end_at,
            }
            .into());
        }

        let promotion = self
            .promotions
            .save(Promotion::new(title, content, start_at, end_at))
            .await?;
        tracing::info!(
            promotion_id = %promotion.promotion_id,
            start_at = %promotion.start_at,
            end_at = %promotion.end_at,
            "Promotion created"
        );
        Ok(promotion)
    }

    pub async fn update_promotion(
        &self,
        promotion_id: &Uuid,
        patch: PromotionPatch,
    ) -> Result<Promotion, TeahouseError> {
        let _guard = self.promotions.write_lock().await;
        let mut promotion = self
            .promotions
            .find_by_id(promotion_id)
            .await
            .ok_or_else(|| TeahouseError::not_found("promotion", *promotion_id))?;

        if let Some(title) = patch.title {
            promotion.title = title;
        }
        if let Some(content) = patch.content {
            promotion.content = content;
        }
        if let Some(is_active) = patch.is_active {
            promotion.is_active = is_active;
        }
        Ok(self.promotions.save(promotion).await?)
    }

    pub async fn delete_promotion(&self, promotion_id: &Uuid) -> Result<bool, TeahouseError> {
        let _guard = self.promotions.write_lock().await;
        Ok(self.promotions.delete(promotion_id).await?)
    }

    /// Promotions valid right now
    pub async fn list_active(&self) -> Vec<Promotion> {
        self.list_active_at(Utc::now()).await
    }

    pub async fn list_active_at(&self, now: DateTime<Utc>) -> Vec<Promotion> {
        self.promotions.find_active_at(now).await
    }

    pub async fn list_all_promotions(&self) -> Vec<Promotion> {
        self.promotions.find_all().await
    }
}
