mod config;
mod entities;
mod handlers;
mod middleware;
mod models;
mod routes;
mod seeders;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use config::{AppState, Config};
use dotenvy::dotenv;
use sea_orm::Database;
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt::init();

    let cfg = Config::init();
    println!("🚀 Starting Atelier Backend...");

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = Database::connect(&cfg.database_url)
        .await
        .expect("🔥 Failed to connect to Database!");
    println!("✅ Database Connected!");

    // 2. Database Seeding
    println!("🌱 Running Seeders...");
    if let Err(e) = seeders::run_seeders(&db).await {
        tracing::error!("❌ Seeding failed: {}", e);
    } else {
        println!("✅ Seeding Successful!");
    }

    // 3. Object Storage
    let storage = services::s3_service::S3Service::new(cfg.clone()).await;

    // 4. Build App State
    let rate_limiter = std::sync::Arc::new(middleware::rate_limiter::RateLimiter::new(
        100,
        std::time::Duration::from_secs(60),
    ));

    let state = AppState {
        db,
        storage,
        rate_limiter,
    };

    // 5. Initialize Router
    let app = routes::create_routes(state.clone()).with_state(state);

    // 6. Start Server
    let addr_str = format!("{}:{}", cfg.server_host, cfg.server_port);
    let addr: SocketAddr = addr_str.parse().expect("Invalid address");

    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
