//! Account registration, login and token revocation.

use sea_orm::DatabaseConnection;

use crate::server::util::jwt::TokenService;

pub mod bootstrap;
pub mod login;
pub mod logout;
pub mod register;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }
}
