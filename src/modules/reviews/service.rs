use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use stayvista_core::AppError;
use stayvista_db::{Collection, DocumentStore, Filter, InsertOneResult};
use stayvista_models::reviews::{CreateReviewDto, NewReview, Review};
use tracing::instrument;

use crate::middleware::role::FORBIDDEN_MESSAGE;
use crate::modules::bookings::service::BookingService;

pub const REVIEWS: &str = "reviews";

pub struct ReviewService;

impl ReviewService {
    fn reviews(store: &Arc<dyn DocumentStore>) -> Collection<Review> {
        Collection::new(Arc::clone(store), REVIEWS)
    }

    /// Inserts a review after checking the reviewer booked the room and has
    /// not reviewed it yet. The checks and the insert are separate store
    /// calls, so two concurrent submissions can both pass.
    #[instrument(skip(store, dto), fields(room_id = %dto.room_id))]
    pub async fn create_review(
        store: &Arc<dyn DocumentStore>,
        reviewer_email: &str,
        dto: CreateReviewDto,
    ) -> Result<InsertOneResult, AppError> {
        if !BookingService::has_booked(store, reviewer_email, &dto.room_id).await? {
            return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
        }

        let reviews = Self::reviews(store);
        let existing = Filter::new()
            .eq("roomId", dto.room_id.as_str())
            .eq("reviewer.email", reviewer_email);
        let already_reviewed = reviews
            .count_documents(&existing)
            .await
            .map_err(AppError::database)?
            > 0;
        if already_reviewed {
            return Err(AppError::conflict(anyhow!(
                "You have already reviewed this room"
            )));
        }

        let review = NewReview::new(dto, reviewer_email, Utc::now().timestamp_millis());
        let result = reviews
            .insert_one(&review)
            .await
            .map_err(AppError::database)?;

        tracing::info!(review_id = %result.inserted_id, "Review posted");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn room_reviews(
        store: &Arc<dyn DocumentStore>,
        room_id: &str,
    ) -> Result<Vec<Review>, AppError> {
        Self::reviews(store)
            .find(&Filter::new().eq("roomId", room_id))
            .await
            .map_err(AppError::database)
    }
}
