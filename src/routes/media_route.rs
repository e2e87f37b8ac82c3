use axum::{middleware, routing::{get, post}, Router};
use crate::config::AppState;
use crate::handlers::media_handler::*;
use crate::middleware::{auth_middleware::admin_guard, rate_limiter::rate_limit_middleware};

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_media_handler).post(add_media_handler))
        .route("/reorder", post(reorder_media_handler))
        .route(
            "/{id}",
            axum::routing::put(update_media_handler).delete(delete_media_handler),
        )
        .layer(middleware::from_fn(admin_guard))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
