//! Shared helper utilities for factory methods.
//!
//! Provides unique ID generation, password hashing and convenience methods for
//! creating entities together with their dependencies.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, DbErr};

/// Password every factory-created account can log in with unless overridden.
pub const DEFAULT_PASSWORD: &str = "Password1!";

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Hash of `DEFAULT_PASSWORD`, computed once per test binary.
static DEFAULT_PASSWORD_HASH: OnceLock<String> = OnceLock::new();

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Hashes a password the same way the server does (Argon2id, PHC string).
///
/// # Arguments
/// - `password` - Plaintext password
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(DbErr::Custom)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Returns the cached hash of `DEFAULT_PASSWORD`.
pub fn default_password_hash() -> Result<String, DbErr> {
    if let Some(hash) = DEFAULT_PASSWORD_HASH.get() {
        return Ok(hash.clone());
    }

    let hash = hash_password(DEFAULT_PASSWORD)?;

    Ok(DEFAULT_PASSWORD_HASH.get_or_init(|| hash).clone())
}

/// Creates a customer and a patient owned by them.
///
/// # Returns
/// - `Ok((customer, patient))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_patient_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::customer::Model, entity::patient::Model), DbErr> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let patient = crate::factory::patient::create_patient(db, customer.id).await?;

    Ok((customer, patient))
}

/// Creates a full appointment hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Customer
/// 2. Patient owned by the customer
/// 3. Veterinarian (non-admin)
/// 4. Appointment between the patient and the veterinarian
///
/// # Returns
/// - `Ok((customer, patient, veterinarian, appointment))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::patient::Model,
        entity::veterinarian::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let (customer, patient) = create_patient_with_owner(db).await?;
    let veterinarian = crate::factory::veterinarian::create_veterinarian(db).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, veterinarian.id, patient.id).await?;

    Ok((customer, patient, veterinarian, appointment))
}
