use sea_orm::DatabaseConnection;

use crate::server::{
    data::veterinarian::VeterinarianRepository,
    error::AppError,
    model::veterinarian::{CreateVeterinarianParams, UpdateVeterinarianParams, Veterinarian},
    util::password::hash_password,
};

pub struct VeterinarianService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VeterinarianService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all veterinarians
    pub async fn get_all(&self) -> Result<Vec<Veterinarian>, AppError> {
        Ok(VeterinarianRepository::new(self.db).get_all().await?)
    }

    /// Gets a veterinarian by ID or fails with 404
    pub async fn get_by_id(&self, id: i32) -> Result<Veterinarian, AppError> {
        VeterinarianRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Registers a veterinarian account
    ///
    /// # Returns
    /// - `Ok(Veterinarian)` - The created veterinarian
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::Conflict)` - The email is already registered
    pub async fn create(&self, params: CreateVeterinarianParams) -> Result<Veterinarian, AppError> {
        params.validate()?;

        let repo = VeterinarianRepository::new(self.db);

        if repo.email_exists(&params.email, None).await? {
            return Err(email_taken(&params.email));
        }

        let password_hash = hash_password(params.password.clone()).await?;
        let veterinarian = repo.create(params, password_hash).await?;

        tracing::info!("Registered veterinarian {}", veterinarian.id);

        Ok(veterinarian)
    }

    /// Validates and applies a partial update, re-hashing a new password
    pub async fn update(&self, params: UpdateVeterinarianParams) -> Result<Veterinarian, AppError> {
        params.validate()?;

        let repo = VeterinarianRepository::new(self.db);

        if let Some(email) = &params.email {
            if repo.email_exists(email, Some(params.id)).await? {
                return Err(email_taken(email));
            }
        }

        let password_hash = match &params.password {
            Some(password) => Some(hash_password(password.clone()).await?),
            None => None,
        };

        let id = params.id;
        repo.update(params, password_hash)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a veterinarian and their appointments
    ///
    /// # Returns
    /// - `Ok(Veterinarian)` - The deleted veterinarian, for the confirmation message
    /// - `Err(AppError::NotFound)` - No veterinarian with that ID
    pub async fn delete(&self, id: i32) -> Result<Veterinarian, AppError> {
        let repo = VeterinarianRepository::new(self.db);

        let veterinarian = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        repo.delete(id).await?;

        tracing::info!("Deleted veterinarian {}", id);

        Ok(veterinarian)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Veterinarian with id {} not found", id))
}

fn email_taken(email: &str) -> AppError {
    AppError::Conflict(format!("Email {} is already registered", email))
}
