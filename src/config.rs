use std::env;
use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::middleware::rate_limiter::RateLimiter;
use crate::services::s3_service::S3Service;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expires_in: i64,
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_bucket_name: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
}

#[derive(Clone, axum::extract::FromRef)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub storage: S3Service,
    pub rate_limiter: Arc<RateLimiter>,
}

impl Config {
    pub fn init() -> Config {
        let server_host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .expect("PORT must be a number");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in .env");
        let jwt_expires_in = env::var("JWT_EXPIRATION_MINUTES")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<i64>()
            .expect("JWT_EXPIRATION_MINUTES must be a number");

        let s3_endpoint = env::var("S3_ENDPOINT").expect("S3_ENDPOINT must be set");
        let s3_region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let s3_bucket_name = env::var("S3_BUCKET_NAME").expect("S3_BUCKET_NAME must be set");
        let s3_access_key = env::var("S3_ACCESS_KEY").expect("S3_ACCESS_KEY must be set");
        let s3_secret_key = env::var("S3_SECRET_KEY").expect("S3_SECRET_KEY must be set");

        Config {
            server_host,
            server_port,
            database_url,
            jwt_secret,
            jwt_expires_in,
            s3_endpoint,
            s3_region,
            s3_bucket_name,
            s3_access_key,
            s3_secret_key,
        }
    }
}
