//! Role administration against the users collection.

use std::sync::Arc;

use anyhow::{Context, bail};
use chrono::Utc;
use stayvista_auth::UserRole;
use stayvista_db::{Collection, DocumentStore, Filter, Update, UpdateOptions, UpdateResult};
use stayvista_models::User;

const USERS: &str = "users";

fn users(store: &Arc<dyn DocumentStore>) -> Collection<User> {
    Collection::new(Arc::clone(store), USERS)
}

/// Creates the user with role `admin`, or promotes the existing record.
pub async fn create_admin(
    store: &Arc<dyn DocumentStore>,
    email: &str,
    name: Option<&str>,
) -> anyhow::Result<UpdateResult> {
    let mut update = Update::new()
        .set("role", UserRole::Admin.as_str())
        .set("timestamp", Utc::now().timestamp_millis());
    if let Some(name) = name.filter(|name| !name.trim().is_empty()) {
        update = update.set("name", name);
    }

    let result = users(store)
        .update_one(&Filter::new().eq("email", email), &update, UpdateOptions::upsert())
        .await
        .context("failed to write admin record")?;

    // A concurrent first write of the same email loses the upsert race.
    if result.matched_count == 0 && result.upserted_id.is_none() {
        bail!("user {email} was created concurrently; run the command again");
    }

    Ok(result)
}

/// Sets the role of an existing user.
pub async fn set_role(
    store: &Arc<dyn DocumentStore>,
    email: &str,
    role: UserRole,
) -> anyhow::Result<UpdateResult> {
    let update = Update::new()
        .set("role", role.as_str())
        .set("timestamp", Utc::now().timestamp_millis());

    let result = users(store)
        .update_one(&Filter::new().eq("email", email), &update, UpdateOptions::default())
        .await
        .context("failed to update role")?;

    if result.matched_count == 0 {
        bail!("no user with email {email}");
    }

    Ok(result)
}
