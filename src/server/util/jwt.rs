//! HS256 JWT issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    model::auth::Role,
    server::{
        error::{auth::AuthError, internal::InternalError, AppError},
        model::auth::Claims,
    },
};

/// Signs and verifies bearer tokens with a shared secret.
///
/// Cheap to clone; stored in `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service from the configured secret and token lifetime.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret shared by issuing and verification
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Lifetime of issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a token for the given subject with a fresh `jti`.
    ///
    /// # Returns
    /// - `Ok((String, Claims))` - The encoded token and the claims it carries
    /// - `Err(AppError::InternalErr(TokenEncoding))` - Signing failed
    pub fn issue(&self, role: Role, subject_id: i32) -> Result<(String, Claims), AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject_id.to_string(),
            role,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(InternalError::TokenEncoding)?;

        Ok((token, claims))
    }

    /// Verifies signature and expiry and returns the claims.
    ///
    /// Revocation is not checked here, see `AuthGuard`.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}
