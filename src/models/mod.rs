pub mod auth_model;
pub mod category_model;
pub mod media_model;
pub mod project_model;
pub mod reorder_model;
pub mod storage_model;
