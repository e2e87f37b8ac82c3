use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct ReorderRequest {
    // Full desired ordering, top first
    #[validate(length(min = 1, message = "ordered_ids cannot be empty"))]
    pub ordered_ids: Vec<Uuid>,
}

#[derive(Deserialize, Validate)]
pub struct MediaReorderRequest {
    // Scope: the owning project
    pub project_id: Uuid,

    #[validate(length(min = 1, message = "ordered_ids cannot be empty"))]
    pub ordered_ids: Vec<Uuid>,
}

#[derive(Serialize)]
pub struct ReorderFailureData {
    // Ids whose rank write failed; everything else is already persisted
    pub failed_ids: Vec<Uuid>,
}
