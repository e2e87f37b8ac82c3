use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub label: String,

    // Machine token; slugified from the label when omitted
    pub key: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    pub key: Option<String>,
    pub label: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub key: String,
    pub label: String,
    pub sort_order: i32,
}

#[derive(Serialize)]
pub struct CategoryCountResponse {
    pub id: Uuid,
    pub key: String,
    pub label: String,
    pub sort_order: i32,
    // Published projects only
    pub count: u64,
}
