use std::sync::Arc;

use anyhow::anyhow;
use stayvista_core::AppError;
use stayvista_db::{Collection, DeleteResult, DocumentStore, Filter, InsertOneResult, Projection};
use stayvista_models::bookings::{Booking, CreateBookingDto};
use stayvista_models::stats::BookingSummary;
use tracing::instrument;

use crate::metrics::track_booking_created;
use crate::middleware::role::FORBIDDEN_MESSAGE;

pub const BOOKINGS: &str = "bookings";

pub struct BookingService;

impl BookingService {
    fn bookings(store: &Arc<dyn DocumentStore>) -> Collection<Booking> {
        Collection::new(Arc::clone(store), BOOKINGS)
    }

    pub fn by_guest(email: &str) -> Filter {
        Filter::new().eq("guest.email", email)
    }

    pub fn by_host(email: &str) -> Filter {
        Filter::new().eq("host.email", email)
    }

    #[instrument(skip(store, dto), fields(room_id = %dto.room_id))]
    pub async fn create_booking(
        store: &Arc<dyn DocumentStore>,
        guest_email: &str,
        dto: CreateBookingDto,
    ) -> Result<InsertOneResult, AppError> {
        if dto.guest.email != guest_email {
            return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
        }

        let result = Self::bookings(store)
            .insert_one(&dto)
            .await
            .map_err(AppError::database)?;

        track_booking_created();
        tracing::info!(booking_id = %result.inserted_id, "Booking created");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn find_bookings(
        store: &Arc<dyn DocumentStore>,
        filter: &Filter,
    ) -> Result<Vec<Booking>, AppError> {
        Self::bookings(store)
            .find(filter)
            .await
            .map_err(AppError::database)
    }

    /// Deletes one of the guest's own bookings.
    #[instrument(skip(store))]
    pub async fn cancel_booking(
        store: &Arc<dyn DocumentStore>,
        guest_email: &str,
        id: &str,
    ) -> Result<DeleteResult, AppError> {
        let filter = Filter::by_id(id).eq("guest.email", guest_email);
        let result = Self::bookings(store)
            .delete_one(&filter)
            .await
            .map_err(AppError::database)?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found(anyhow!("Booking not found")));
        }

        tracing::info!(booking_id = %id, "Booking cancelled");
        Ok(result)
    }

    pub async fn has_booked(
        store: &Arc<dyn DocumentStore>,
        guest_email: &str,
        room_id: &str,
    ) -> Result<bool, AppError> {
        let filter = Self::by_guest(guest_email).eq("roomId", room_id);
        let count = Self::bookings(store)
            .count_documents(&filter)
            .await
            .map_err(AppError::database)?;
        Ok(count > 0)
    }

    /// `date`/`price` of every matching booking, in booking order.
    pub async fn summaries(
        store: &Arc<dyn DocumentStore>,
        filter: &Filter,
    ) -> Result<Vec<BookingSummary>, AppError> {
        Self::bookings(store)
            .find_projected(filter, &Projection::include(["date", "price"]))
            .await
            .map_err(AppError::database)
    }
}
