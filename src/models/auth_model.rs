use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

// Injected into request extensions by the admin guard
#[derive(Debug, Clone)]
pub struct CurrentAdmin {
    pub id: Uuid,
}
