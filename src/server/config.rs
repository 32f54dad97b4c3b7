use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRES_HOURS: i64 = 24;

/// Credentials for the admin veterinarian created on first start.
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_expires_hours: i64,

    /// Set when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are present.
    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                first_name: optional("ADMIN_FIRST_NAME").unwrap_or_else(|| "Clinic".to_string()),
                last_name: optional("ADMIN_LAST_NAME").unwrap_or_else(|| "Admin".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expires_hours: parsed("JWT_EXPIRES_HOURS")?.unwrap_or(DEFAULT_JWT_EXPIRES_HOURS),
            admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    optional(name)
        .map(|value| {
            value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        })
        .transpose()
}
