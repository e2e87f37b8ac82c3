pub mod category_service;
pub mod media_service;
pub mod project_service;
pub mod reorder_service;
pub mod s3_service;
