use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header on a protected endpoint.
    #[error("Missing or malformed bearer token")]
    MissingToken,

    /// Token signature, format or expiry check failed.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Token's `jti` is in the blocklist (user logged out).
    #[error("Token {0} has been revoked")]
    TokenRevoked(String),

    /// Token is valid but its subject was deleted since it was issued.
    #[error("{0:?} {1} from token no longer exists")]
    SubjectNotFound(Role, i32),

    /// Login with an unknown email or wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the permission required by the endpoint.
    ///
    /// The message is returned to the client.
    #[error("{0}")]
    AccessDenied(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `TokenRevoked` / `SubjectNotFound` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid email or password"
/// - `AccessDenied` → 403 Forbidden with the denial reason
///
/// All errors are logged at debug level. Authentication failures return a fixed message per
/// variant without the underlying token error; `AccessDenied` returns its own message, which
/// names the customer, veterinarian, patient or appointment the caller was denied.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing or malformed bearer token".to_string(),
            ),
            Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired token".to_string(),
            ),
            Self::TokenRevoked(_) => (
                StatusCode::UNAUTHORIZED,
                "Token has been revoked".to_string(),
            ),
            Self::SubjectNotFound(_, _) => (
                StatusCode::UNAUTHORIZED,
                "Account no longer exists".to_string(),
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::AccessDenied(message) => (StatusCode::FORBIDDEN, message),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
