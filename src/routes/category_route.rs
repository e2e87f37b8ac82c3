use axum::{middleware, routing::{get, post}, Router};
use crate::config::AppState;
use crate::handlers::category_handler::*;
use crate::middleware::{auth_middleware::admin_guard, rate_limiter::rate_limit_middleware};

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(list_public_categories_handler))
}

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_admin_categories_handler).post(create_category_handler))
        .route("/reorder", post(reorder_categories_handler))
        .route(
            "/{id}",
            axum::routing::put(update_category_handler).delete(delete_category_handler),
        )
        .layer(middleware::from_fn(admin_guard))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
