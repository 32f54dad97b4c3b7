//! Veterinarian factory for creating test veterinarian entities.

use crate::factory::helpers::{default_password_hash, hash_password, next_id};
use entity::sea_orm_active_enums::Sex;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test veterinarians with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = VeterinarianFactory::new(&db)
///     .email("head@vet.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct VeterinarianFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password: Option<String>,
    description: Option<String>,
    sex: Sex,
    languages: Option<String>,
    is_admin: bool,
}

impl<'a> VeterinarianFactory<'a> {
    /// Creates a new VeterinarianFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Vet"`
    /// - last_name: `"{id}"`
    /// - email: `"vet{id}@vet.com"`
    /// - password: `DEFAULT_PASSWORD`
    /// - description / languages: `None`
    /// - sex: `Female`
    /// - is_admin: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Vet".to_string(),
            last_name: id.to_string(),
            email: format!("vet{}@vet.com", id),
            password: None,
            description: None,
            sex: Sex::Female,
            languages: None,
            is_admin: false,
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

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Sets the stored language column, comma separated (e.g. `"English,French"`).
    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = Some(languages.into());
        self
    }

    pub fn admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Builds and inserts the veterinarian entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::veterinarian::Model)` - Created veterinarian entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::veterinarian::Model, DbErr> {
        let password = match self.password {
            Some(password) => hash_password(&password)?,
            None => default_password_hash()?,
        };

        entity::veterinarian::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(password),
            description: ActiveValue::Set(self.description),
            sex: ActiveValue::Set(self.sex),
            languages: ActiveValue::Set(self.languages),
            is_admin: ActiveValue::Set(self.is_admin),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a non-admin veterinarian with default values.
pub async fn create_veterinarian(
    db: &DatabaseConnection,
) -> Result<entity::veterinarian::Model, DbErr> {
    VeterinarianFactory::new(db).build().await
}

/// Creates an admin veterinarian with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::veterinarian::Model, DbErr> {
    VeterinarianFactory::new(db).admin(true).build().await
}
