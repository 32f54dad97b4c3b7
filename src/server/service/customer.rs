use sea_orm::DatabaseConnection;

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{Customer, UpdateCustomerParams},
    util::password::hash_password,
};

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all customers
    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        Ok(CustomerRepository::new(self.db).get_all().await?)
    }

    /// Gets a customer by ID or fails with 404
    pub async fn get_by_id(&self, id: i32) -> Result<Customer, AppError> {
        CustomerRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validates and applies a partial update, re-hashing a new password
    pub async fn update(&self, params: UpdateCustomerParams) -> Result<Customer, AppError> {
        params.validate()?;

        let repo = CustomerRepository::new(self.db);

        if let Some(email) = &params.email {
            if repo.email_exists(email, Some(params.id)).await? {
                return Err(AppError::Conflict(format!(
                    "Email {} is already registered",
                    email
                )));
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

    /// Deletes a customer together with their patients and appointments
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CustomerRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted customer {}", id);

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Customer with id {} not found", id))
}
