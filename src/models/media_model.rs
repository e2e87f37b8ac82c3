use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::entities::media::MediaType;

#[derive(Deserialize, Validate)]
pub struct CreateMediaRequest {
    // Owning project public ID
    pub project_id: Uuid,

    #[serde(rename = "type")]
    pub media_type: MediaType,

    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub src: String,

    pub alt: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateMediaRequest {
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub src: Option<String>,
    pub alt: Option<String>,
}

#[derive(Serialize)]
pub struct MediaResponse {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub src: String,
    // Drive share links rewritten to their /preview form; video only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_src: Option<String>,
    pub alt: Option<String>,
    pub sort_order: i32,
}
