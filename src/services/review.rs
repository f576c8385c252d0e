use crate::core::{InputError, Repository, TeahouseError};
use crate::entities::{RATING_RANGE, Review};
use crate::repositories::ReviewRepository;
use uuid::Uuid;

/// Customer reviews and shop replies.
///
/// Reviews are not checked against order ownership and several reviews per
/// order are accepted.
#[derive(Clone)]
pub struct ReviewService {
    reviews: ReviewRepository,
}

impl ReviewService {
    pub fn new(reviews: ReviewRepository) -> Self {
        Self { reviews }
    }

    pub async fn create_review(
        &self,
        user_id: &Uuid,
        order_id: &Uuid,
        rating: i64,
        content: impl Into<String>,
    ) -> Result<Review, TeahouseError> {
        let rating = match u8::try_from(rating) {
            Ok(value) if RATING_RANGE.contains(&rating) => value,
            _ => return Err(InputError::InvalidRating { rating }.into()),
        };

        let review = self
            .reviews
            .save(Review::new(*user_id, *order_id, rating, content))
            .await?;
        tracing::info!(
            review_id = %review.review_id,
            order_id = %order_id,
            rating,
            "Review created"
        );
        Ok(review)
    }

    /// Attach or replace the shop's reply
    pub async fn reply_review(
        &self,
        review_id: &Uuid,
        reply: impl Into<String>,
    ) -> Result<Review, TeahouseError> {
        let _guard = self.reviews.write_lock().await;
        let mut review = self
            .reviews
            .find_by_id(review_id)
            .await
            .ok_or_else(|| TeahouseError::not_found("review", *review_id))?;

        review.reply = Some(reply.into());
        Ok(self.reviews.save(review).await?)
    }

    /// A user's reviews in storage order, or every review newest first
    pub async fn list_reviews(&self, user_id: Option<&Uuid>) -> Vec<Review> {
        match user_id {
            Some(user_id) => self.reviews.find_by_user(user_id).await,
            None => self.reviews.find_all_sorted().await,
        }
    }

    /// The first review left on an order
    pub async fn get_review_by_order(&self, order_id: &Uuid) -> Option<Review> {
        self.reviews.find_by_order(order_id).await.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryRepository;
    use std::sync::Arc;

    fn service() -> ReviewService {
        ReviewService::new(ReviewRepository::new(Arc::new(InMemoryRepository::new())))
    }

    #[tokio::test]
    async fn test_rating_bounds() {
        let reviews = service();
        let (user, order) = (Uuid::new_v4(), Uuid::new_v4());

        for rating in [0, 6, -1, 256] {
            let err = reviews
                .create_review(&user, &order, rating, "")
                .await
                .unwrap_err();
            assert_eq!(err.error_code(), "INVALID_RATING");
        }
        assert!(reviews.list_reviews(None).await.is_empty());

        for rating in 1..=5 {
            reviews
                .create_review(&user, &order, rating, "ok")
                .await
                .unwrap();
        }
        assert_eq!(reviews.list_reviews(Some(&user)).await.len(), 5);
    }

    #[tokio::test]
    async fn test_reply_and_lookup_by_order() {
        let reviews = service();
        let (user, order) = (Uuid::new_v4(), Uuid::new_v4());
        let review = reviews
            .create_review(&user, &order, 5, "Great tea")
            .await
            .unwrap();

        let replied = reviews
            .reply_review(&review.review_id, "Thank you!")
            .await
            .unwrap();
        assert_eq!(replied.reply.as_deref(), Some("Thank you!"));
        assert_eq!(reviews.get_review_by_order(&order).await, Some(replied));
        assert_eq!(reviews.get_review_by_order(&Uuid::new_v4()).await, None);

        let err = reviews
            .reply_review(&Uuid::new_v4(), "?")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "ENTITY_NOT_FOUND");
    }
}
