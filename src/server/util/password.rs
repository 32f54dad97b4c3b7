//! Argon2id password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Hashes a plaintext password into a PHC string for storage.
///
/// # Returns
/// - `Ok(String)` - PHC formatted Argon2id hash
/// - `Err(AppError::InternalErr(PasswordHash))` - Hashing failed or the task panicked
pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
    })
    .await
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(hash)
}

/// Verifies a plaintext password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password doesn't match
/// - `Err(AppError::InternalErr(PasswordHash))` - Stored hash can't be parsed
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches = tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&hash)?;
        Ok::<bool, argon2::password_hash::Error>(
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
        )
    })
    .await
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(matches)
}
