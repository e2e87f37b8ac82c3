use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize)]
pub struct UploadResponse {
    pub url: String,
}

#[derive(Deserialize, Validate)]
pub struct DeleteFileRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub url: String,
}
