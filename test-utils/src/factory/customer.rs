//! Customer factory for creating test customer entities.

use crate::factory::helpers::{default_password_hash, hash_password, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let customer = CustomerFactory::new(&db)
///     .email("harry@test.com")
///     .password("HarryPorter1!")
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password: Option<String>,
    contact_number: i64,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Customer"`
    /// - last_name: `"{id}"` where id is auto-incremented
    /// - email: `"customer{id}@test.com"`
    /// - password: `DEFAULT_PASSWORD`
    /// - contact_number: `412000000 + id`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Customer".to_string(),
            last_name: id.to_string(),
            email: format!("customer{}@test.com", id),
            password: None,
            contact_number: 412_000_000 + (id % 1_000_000) as i64,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets a plaintext password which is hashed on insert.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn contact_number(mut self, contact_number: i64) -> Self {
        self.contact_number = contact_number;
        self
    }

    /// Builds and inserts the customer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::customer::Model)` - Created customer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        let password = match self.password {
            Some(password) => hash_password(&password)?,
            None => default_password_hash()?,
        };

        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(password),
            contact_number: ActiveValue::Set(self.contact_number),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
///
/// Shorthand for `CustomerFactory::new(db).build().await`.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
