//! User records and the two ways they are written: the public self-service
//! upsert and the admin-only role update.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use stayvista_auth::roles::UnknownRole;
use stayvista_auth::{UserRole, UserStatus};
use utoipa::ToSchema;
use validator::Validate;

/// A user record. At most one exists per email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `None` when the stored role is outside the known set. Such a user
    /// passes no role gate but is still listed.
    #[serde(
        default = "guest_role",
        deserialize_with = "deserialize_stored_role",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<UserRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Milliseconds since the Unix epoch of the last registration or role change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// Interprets a stored `role` field. A missing or `null` role is a guest.
pub fn stored_role(value: Option<&Value>) -> Result<UserRole, UnknownRole> {
    match value {
        None | Some(Value::Null) => Ok(UserRole::Guest),
        Some(Value::String(role)) => role.parse(),
        Some(other) => Err(UnknownRole(other.to_string())),
    }
}

fn guest_role() -> Option<UserRole> {
    Some(UserRole::Guest)
}

fn deserialize_stored_role<'de, D>(deserializer: D) -> Result<Option<UserRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(stored_role(value.as_ref()).ok())
}

/// Self-service registration payload (`PUT /user`).
///
/// `role` is accepted on the wire only so it can be detected and ignored;
/// it is never written.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveUserDto {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub role: Option<Value>,
}

impl SaveUserDto {
    /// `Some(Requested)` when the caller asks to become a host. Any other
    /// submitted status is not accepted from self-service.
    pub fn requested_status(&self) -> Option<UserStatus> {
        match self.status.as_deref() {
            Some("Requested") => Some(UserStatus::Requested),
            _ => None,
        }
    }

    pub fn attempts_role_change(&self) -> bool {
        self.role.as_ref().is_some_and(|role| !role.is_null())
    }
}

/// Profile fields written on first registration. Role is always the default.
#[derive(Debug, Clone, Serialize)]
pub struct NewUserFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    pub timestamp: i64,
}

impl NewUserFields {
    pub fn from_submission(dto: &SaveUserDto, timestamp: i64) -> Self {
        Self {
            name: dto.name.clone(),
            image: dto.image.clone(),
            role: UserRole::default(),
            status: dto.requested_status(),
            timestamp,
        }
    }
}

/// Admin role-update payload. Unknown role values fail deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleDto {
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}
