//! Listing ("room") models.

use serde::{Deserialize, Serialize};
use stayvista_core::serde::{
    deserialize_lenient_f64, deserialize_optional_lenient_f64, deserialize_optional_lenient_u32,
};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::PersonInfo;

/// A listing as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Room {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub location: String,
    pub category: String,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Availability window start, as submitted by the listing form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub host: PersonInfo,
    #[serde(default)]
    pub booked: bool,
}

/// DTO for creating a listing. `host.email` must be the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoomDto {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[validate(nested)]
    pub host: PersonInfo,
    #[serde(default)]
    pub booked: bool,
}

/// Editable listing fields. Absent fields are left untouched; the host and
/// the booked flag are not editable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_f64",
        skip_serializing_if = "Option::is_none"
    )]
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub guests: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_lenient_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct RoomStatusDto {
    pub booked: bool,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct RoomQuery {
    pub category: Option<String>,
}

impl RoomQuery {
    /// The category to filter by. Blank values and the literal `"null"` sent
    /// by clients with no selection mean "all categories".
    pub fn category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty() && *c != "null")
    }
}
