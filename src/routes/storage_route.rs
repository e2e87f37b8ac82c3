use axum::{middleware, routing::{delete, post}, Router};
use crate::config::AppState;
use crate::handlers::storage_handler::*;
use crate::middleware::{auth_middleware::admin_guard, rate_limiter::rate_limit_middleware};

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/", delete(delete_file_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
