use crate::config::AppState;
use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

pub mod category_route;
pub mod media_route;
pub mod project_route;
pub mod storage_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        // Public surface
        .nest("/api/projects", project_route::public_routes())
        .nest("/api/categories", category_route::public_routes())
        // Admin console
        .nest("/api/admin/projects", project_route::admin_routes(state.clone()))
        .nest("/api/admin/categories", category_route::admin_routes(state.clone()))
        .nest("/api/admin/media", media_route::admin_routes(state.clone()))
        .nest("/api/admin/storage", storage_route::admin_routes(state))
        // Health check
        .route("/api/health", axum::routing::get(|| async { "OK" }))
        .layer(cors)
}
