use crate::config::Config;
use crate::models::auth_model::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use uuid::Uuid;

pub struct JwtUtils;

impl JwtUtils {
    /// Validate an admin token and return the token data
    pub fn validate_jwt(token: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        let cfg = Config::init();
        let decoding_key = DecodingKey::from_secret(cfg.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<Claims>(token, &decoding_key, &validation)
    }

    /// Mint a token for the given subject. Issuance normally lives with the
    /// identity provider; this exists for local tooling and tests.
    #[allow(dead_code)]
    pub fn generate_jwt(subject: Uuid, role: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let cfg = Config::init();
        let now = Utc::now();
        let expire = now + Duration::minutes(cfg.jwt_expires_in);
        let claims = Claims {
            sub: subject,
            role: role.to_string(),
            exp: expire.timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )
    }
}
