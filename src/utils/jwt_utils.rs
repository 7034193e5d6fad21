use crate::config::Config;
use crate::models::admin_model::Claims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use uuid::Uuid;

pub struct JwtUtils;

impl JwtUtils {
    /// Issues the admin bearer token. Returns the token with its expiry
    /// timestamp so the client knows when to re-login.
    pub fn generate_jwt(
        admin_id: Uuid,
        username: &str,
    ) -> Result<(String, usize), jsonwebtoken::errors::Error> {
        let cfg = Config::init();
        let now = Utc::now();
        let expire = now + Duration::minutes(cfg.jwt_expires_in);
        let claims = Claims {
            sub: admin_id,
            username: username.to_string(),
            exp: expire.timestamp() as usize,
            iat: now.timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        )?;
        Ok((token, claims.exp))
    }

    pub fn validate_jwt(token: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
        let cfg = Config::init();
        let decoding_key = DecodingKey::from_secret(cfg.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        decode::<Claims>(token, &decoding_key, &validation)
    }
}
