use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::PersonInfo;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    pub room_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub reviewer: PersonInfo,
    pub timestamp: i64,
}

/// Review submission. The reviewer's email is taken from the credential, so
/// only display details are read from the body.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    #[validate(length(min = 1))]
    pub room_id: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub comment: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A review ready for insertion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub room_id: String,
    pub rating: u8,
    pub comment: String,
    pub reviewer: PersonInfo,
    pub timestamp: i64,
}

impl NewReview {
    pub fn new(dto: CreateReviewDto, reviewer_email: &str, timestamp: i64) -> Self {
        Self {
            room_id: dto.room_id,
            rating: dto.rating,
            comment: dto.comment,
            reviewer: PersonInfo {
                name: dto.name,
                email: reviewer_email.to_string(),
                image: dto.image,
            },
            timestamp,
        }
    }
}
