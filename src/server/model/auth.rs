//! Identity types: JWT claims and the authenticated account behind a request.

use serde::{Deserialize, Serialize};

use crate::{
    model::auth::{Role, TokenDto},
    server::{
        error::auth::AuthError,
        model::{customer::Customer, veterinarian::Veterinarian},
    },
};

/// Claims carried by every bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the customer or veterinarian row, as a string per RFC 7519
    pub sub: String,
    /// Table the subject belongs to
    pub role: Role,
    /// Unique token ID, recorded in the blocklist on logout
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Parses the subject claim back into a row ID.
    pub fn subject_id(&self) -> Result<i32, AuthError> {
        self.sub
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidToken(format!("invalid subject '{}'", self.sub)))
    }
}

/// The account a request was authenticated as.
///
/// Loaded from the database on every request, so a veterinarian's admin flag or a
/// deleted account take effect immediately.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthUser {
    Customer(Customer),
    Veterinarian(Veterinarian),
}

impl AuthUser {
    pub fn role(&self) -> Role {
        match self {
            Self::Customer(_) => Role::Customer,
            Self::Veterinarian(_) => Role::Veterinarian,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Customer(customer) => customer.id,
            Self::Veterinarian(veterinarian) => veterinarian.id,
        }
    }

    /// Admins are veterinarians with the `is_admin` flag set.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Veterinarian(veterinarian) if veterinarian.is_admin)
    }

    pub fn customer_id(&self) -> Option<i32> {
        match self {
            Self::Customer(customer) => Some(customer.id),
            Self::Veterinarian(_) => None,
        }
    }

    pub fn veterinarian_id(&self) -> Option<i32> {
        match self {
            Self::Customer(_) => None,
            Self::Veterinarian(veterinarian) => Some(veterinarian.id),
        }
    }
}

/// A freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub claims: Claims,
    /// ID of the customer or veterinarian the token was issued to
    pub subject_id: i32,
    /// Lifetime in seconds
    pub expires_in: i64,
}

impl IssuedToken {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            token: self.token,
            role: self.claims.role,
            id: self.subject_id,
            expires_in: self.expires_in,
        }
    }
}
