use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;
use crate::models::category_model::CategoryResponse;
use crate::models::media_model::MediaResponse;

#[derive(Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    // Free-form display string, e.g. "2024.03"
    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub thumbnail: String,

    #[serde(default)]
    pub tags: Vec<String>,

    // Category public IDs; full set, order irrelevant
    #[serde(default)]
    pub categories: Vec<Uuid>,

    #[serde(default)]
    pub is_published: bool,
}

#[derive(Deserialize, Validate)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub thumbnail: Option<String>,
    pub tags: Option<Vec<String>>,
    // When present, replaces the whole association set
    pub categories: Option<Vec<Uuid>>,
    pub is_published: Option<bool>,
}

#[derive(Deserialize)]
pub struct ProjectFilterParams {
    // Category key ("web", "ai-video"); omitted = all
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub thumbnail: String,
    pub tags: Vec<String>,
    pub is_published: bool,
    pub sort_order: i32,
    pub categories: Vec<CategoryResponse>,
    pub media: Vec<MediaResponse>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
