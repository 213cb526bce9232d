use std::sync::Arc;

use anyhow::anyhow;
use stayvista_core::AppError;
use stayvista_db::{
    Collection, DeleteResult, DocumentStore, Filter, InsertOneResult, Update, UpdateOptions,
    UpdateResult,
};
use stayvista_models::rooms::{CreateRoomDto, Room, UpdateRoomDto};
use tracing::instrument;

use crate::middleware::role::FORBIDDEN_MESSAGE;

pub const ROOMS: &str = "rooms";

pub struct RoomService;

impl RoomService {
    fn rooms(store: &Arc<dyn DocumentStore>) -> Collection<Room> {
        Collection::new(Arc::clone(store), ROOMS)
    }

    fn owned_by(id: &str, host_email: &str) -> Filter {
        Filter::by_id(id).eq("host.email", host_email)
    }

    #[instrument(skip(store))]
    pub async fn list_rooms(
        store: &Arc<dyn DocumentStore>,
        category: Option<&str>,
    ) -> Result<Vec<Room>, AppError> {
        let filter = match category {
            Some(category) => Filter::new().eq("category", category),
            None => Filter::new(),
        };

        Self::rooms(store)
            .find(&filter)
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn get_room(store: &Arc<dyn DocumentStore>, id: &str) -> Result<Room, AppError> {
        Self::rooms(store)
            .find_one(&Filter::by_id(id))
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("Room not found")))
    }

    #[instrument(skip(store, dto), fields(title = %dto.title))]
    pub async fn create_room(
        store: &Arc<dyn DocumentStore>,
        host_email: &str,
        dto: CreateRoomDto,
    ) -> Result<InsertOneResult, AppError> {
        if dto.host.email != host_email {
            return Err(AppError::forbidden(FORBIDDEN_MESSAGE));
        }

        let result = Self::rooms(store)
            .insert_one(&dto)
            .await
            .map_err(AppError::database)?;

        tracing::info!(room_id = %result.inserted_id, "Room listed");
        Ok(result)
    }

    /// Applies the present fields to one of the host's own rooms.
    #[instrument(skip(store, dto))]
    pub async fn update_room(
        store: &Arc<dyn DocumentStore>,
        host_email: &str,
        id: &str,
        dto: UpdateRoomDto,
    ) -> Result<UpdateResult, AppError> {
        let update = Update::set_fields(&dto).map_err(AppError::internal)?;
        if update.is_empty() {
            return Err(AppError::bad_request(anyhow!("No fields to update")));
        }

        let result = Self::rooms(store)
            .update_one(&Self::owned_by(id, host_email), &update, UpdateOptions::default())
            .await
            .map_err(AppError::database)?;

        if result.matched_count == 0 {
            return Err(AppError::not_found(anyhow!("Room not found")));
        }

        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn set_booked(
        store: &Arc<dyn DocumentStore>,
        id: &str,
        booked: bool,
    ) -> Result<UpdateResult, AppError> {
        Self::rooms(store)
            .update_one(
                &Filter::by_id(id),
                &Update::new().set("booked", booked),
                UpdateOptions::default(),
            )
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn delete_room(
        store: &Arc<dyn DocumentStore>,
        host_email: &str,
        id: &str,
    ) -> Result<DeleteResult, AppError> {
        let result = Self::rooms(store)
            .delete_one(&Self::owned_by(id, host_email))
            .await
            .map_err(AppError::database)?;

        if result.deleted_count == 0 {
            return Err(AppError::not_found(anyhow!("Room not found")));
        }

        tracing::info!(room_id = %id, "Room removed");
        Ok(result)
    }

    #[instrument(skip(store))]
    pub async fn host_listings(
        store: &Arc<dyn DocumentStore>,
        host_email: &str,
    ) -> Result<Vec<Room>, AppError> {
        Self::rooms(store)
            .find(&Filter::new().eq("host.email", host_email))
            .await
            .map_err(AppError::database)
    }

    pub async fn count_rooms(
        store: &Arc<dyn DocumentStore>,
        filter: &Filter,
    ) -> Result<u64, AppError> {
        Self::rooms(store)
            .count_documents(filter)
            .await
            .map_err(AppError::database)
    }
}
