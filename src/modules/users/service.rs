use std::sync::Arc;

use anyhow::anyhow;
use chrono::Utc;
use serde::Serialize;
use stayvista_auth::UserRole;
use stayvista_core::AppError;
use stayvista_db::{Collection, DocumentStore, Filter, Update, UpdateOptions, UpdateResult};
use stayvista_models::users::{NewUserFields, SaveUserDto, UpdateRoleDto, User, stored_role};
use tracing::instrument;
use utoipa::ToSchema;

pub const USERS: &str = "users";

/// Result of the self-service upsert: either the untouched existing record
/// or the acknowledgement of the write that was applied.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SaveUserOutcome {
    Existing(User),
    Written(UpdateResult),
}

pub struct UserService;

impl UserService {
    fn users(store: &Arc<dyn DocumentStore>) -> Collection<User> {
        Collection::new(Arc::clone(store), USERS)
    }

    fn by_email(email: &str) -> Filter {
        Filter::new().eq("email", email)
    }

    /// Role Resolver: one read of the caller's record.
    ///
    /// `None` when no record exists or the stored role is not a known role.
    /// A record without a role field is a guest.
    #[instrument(skip(store))]
    pub async fn resolve_role(
        store: &Arc<dyn DocumentStore>,
        email: &str,
    ) -> Result<Option<UserRole>, AppError> {
        let record = store
            .find_one(USERS, &Self::by_email(email))
            .await
            .map_err(AppError::database)?;

        let Some(record) = record else {
            return Ok(None);
        };

        match stored_role(record.get("role")) {
            Ok(role) => Ok(Some(role)),
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "Stored role is not recognised");
                Ok(None)
            }
        }
    }

    #[instrument(skip(store))]
    pub async fn get_user(store: &Arc<dyn DocumentStore>, email: &str) -> Result<User, AppError> {
        Self::users(store)
            .find_one(&Self::by_email(email))
            .await
            .map_err(AppError::database)?
            .ok_or_else(|| AppError::not_found(anyhow!("User not found")))
    }

    #[instrument(skip(store))]
    pub async fn find_user(
        store: &Arc<dyn DocumentStore>,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        Self::users(store)
            .find_one(&Self::by_email(email))
            .await
            .map_err(AppError::database)
    }

    #[instrument(skip(store))]
    pub async fn list_users(store: &Arc<dyn DocumentStore>) -> Result<Vec<User>, AppError> {
        Self::users(store)
            .find(&Filter::new())
            .await
            .map_err(AppError::database)
    }

    /// Self-service registration.
    ///
    /// Existing record: a `Requested` status is written (idempotently), anything
    /// else is a no-op echo of the record. New identifier: one record is created
    /// with the default role and a registration timestamp. The submitted role
    /// is never written on either path.
    #[instrument(skip(store, dto), fields(email = %dto.email))]
    pub async fn save_user(
        store: &Arc<dyn DocumentStore>,
        dto: SaveUserDto,
    ) -> Result<SaveUserOutcome, AppError> {
        if dto.attempts_role_change() {
            tracing::warn!("Ignoring role submitted through self-service registration");
        }

        let users = Self::users(store);
        let filter = Self::by_email(&dto.email);

        if let Some(existing) = users.find_one(&filter).await.map_err(AppError::database)? {
            return match dto.requested_status() {
                Some(status) => {
                    let update = Update::new().set("status", serde_json::to_value(status)?);
                    let result = users
                        .update_one(&filter, &update, UpdateOptions::default())
                        .await
                        .map_err(AppError::database)?;
                    Ok(SaveUserOutcome::Written(result))
                }
                None => Ok(SaveUserOutcome::Existing(existing)),
            };
        }

        let fields = NewUserFields::from_submission(&dto, Utc::now().timestamp_millis());
        let update = Update::set_fields(&fields).map_err(AppError::internal)?;

        match users.update_one(&filter, &update, UpdateOptions::upsert()).await {
            Ok(result) => {
                tracing::info!("User registered");
                Ok(SaveUserOutcome::Written(result))
            }
            // Lost a race with a concurrent first registration
            Err(e) if e.is_duplicate_key() => {
                let existing = Self::get_user(store, &dto.email).await?;
                Ok(SaveUserOutcome::Existing(existing))
            }
            Err(e) => Err(AppError::database(e)),
        }
    }

    /// Privileged role update. Sets `role`, the optional `status`, and a fresh
    /// timestamp on the matching record.
    #[instrument(skip(store))]
    pub async fn update_role(
        store: &Arc<dyn DocumentStore>,
        email: &str,
        dto: UpdateRoleDto,
    ) -> Result<UpdateResult, AppError> {
        let mut update = Update::new()
            .set("role", dto.role.as_str())
            .set("timestamp", Utc::now().timestamp_millis());
        if let Some(status) = dto.status {
            update = update.set("status", serde_json::to_value(status)?);
        }

        let result = Self::users(store)
            .update_one(&Self::by_email(email), &update, UpdateOptions::default())
            .await
            .map_err(AppError::database)?;

        if result.matched_count == 0 {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        tracing::info!(role = %dto.role, "User role updated");
        Ok(result)
    }

    pub async fn count_users(store: &Arc<dyn DocumentStore>) -> Result<u64, AppError> {
        Self::users(store)
            .count_documents(&Filter::new())
            .await
            .map_err(AppError::database)
    }
}
