use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stayvista_core::serde::deserialize_lenient_f64;
use utoipa::ToSchema;
use validator::Validate;

use crate::common::PersonInfo;

/// A reservation of a room by a guest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub guest: PersonInfo,
    pub host: PersonInfo,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub price: f64,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// DTO for creating a booking. `guest.email` must be the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    #[validate(length(min = 1))]
    pub room_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[validate(nested)]
    pub guest: PersonInfo,
    #[validate(nested)]
    pub host: PersonInfo,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    #[validate(range(min = 0.0))]
    pub price: f64,
    /// Defaults to the time the booking is received.
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}
