use axum::{middleware, routing::{get, post}, Router};
use crate::config::AppState;
use crate::handlers::project_handler::*;
use crate::middleware::{auth_middleware::admin_guard, rate_limiter::rate_limit_middleware};

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_public_projects_handler))
        .route("/{id}", get(get_public_project_handler))
}

pub fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_admin_projects_handler).post(create_project_handler))
        .route("/reorder", post(reorder_projects_handler))
        .route(
            "/{id}",
            get(get_admin_project_handler)
                .put(update_project_handler)
                .delete(delete_project_handler),
        )
        .route("/{id}/publish", post(toggle_published_handler))
        .layer(middleware::from_fn(admin_guard))
        .layer(middleware::from_fn_with_state(state, rate_limit_middleware))
}
