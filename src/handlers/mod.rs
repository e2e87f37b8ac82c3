pub mod category_handler;
pub mod media_handler;
pub mod project_handler;
pub mod storage_handler;
