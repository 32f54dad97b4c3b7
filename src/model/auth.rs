use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which account table a bearer token's subject belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Veterinarian,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    /// Signed JWT to send as `Authorization: Bearer <token>`
    pub token: String,
    pub role: Role,
    /// ID of the logged in customer or veterinarian
    pub id: i32,
    /// Seconds until the token expires
    pub expires_in: i64,
}
