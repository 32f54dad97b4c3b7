use sea_orm::DatabaseConnection;

use crate::server::{
    data::{customer::CustomerRepository, patient::PatientRepository},
    error::AppError,
    model::patient::{CreatePatientParams, Patient, PatientDetails, UpdatePatientParams},
};

pub struct PatientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every patient with owner and appointments
    pub async fn get_all(&self) -> Result<Vec<PatientDetails>, AppError> {
        Ok(PatientRepository::new(self.db).get_all_details().await?)
    }

    /// Gets the patients of one customer
    pub async fn get_by_customer(&self, customer_id: i32) -> Result<Vec<PatientDetails>, AppError> {
        Ok(PatientRepository::new(self.db)
            .get_details_by_customer(customer_id)
            .await?)
    }

    /// Gets a patient with owner and appointments or fails with 404
    pub async fn get_by_id(&self, id: i32) -> Result<PatientDetails, AppError> {
        PatientRepository::new(self.db)
            .get_details(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Registers a patient to an owner
    ///
    /// # Returns
    /// - `Ok(PatientDetails)` - The created patient
    /// - `Err(AppError::BadRequest)` - A field failed validation
    /// - `Err(AppError::NotFound)` - The owner doesn't exist
    /// - `Err(AppError::Conflict)` - The owner already has a patient with that name
    pub async fn create(&self, params: CreatePatientParams) -> Result<PatientDetails, AppError> {
        params.validate()?;

        self.ensure_customer_exists(params.customer_id).await?;

        let repo = PatientRepository::new(self.db);

        if repo
            .name_taken(params.customer_id, &params.name, None)
            .await?
        {
            return Err(name_taken(params.customer_id, &params.name));
        }

        let patient = repo.create(params).await?;

        tracing::info!(
            "Registered patient {} for customer {}",
            patient.id,
            patient.customer_id
        );

        self.get_by_id(patient.id).await
    }

    /// Validates and applies a partial update
    ///
    /// The (owner, name) uniqueness is checked against the resulting values, so renaming
    /// and moving to another owner are both covered.
    pub async fn update(&self, params: UpdatePatientParams) -> Result<PatientDetails, AppError> {
        params.validate()?;

        let repo = PatientRepository::new(self.db);

        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        let customer_id = params.customer_id.unwrap_or(existing.customer_id);
        if customer_id != existing.customer_id {
            self.ensure_customer_exists(customer_id).await?;
        }

        let name = params.name.as_deref().unwrap_or(&existing.name);
        if repo.name_taken(customer_id, name, Some(existing.id)).await? {
            return Err(name_taken(customer_id, name));
        }

        let id = params.id;
        repo.update(params).await?.ok_or_else(|| not_found(id))?;

        self.get_by_id(id).await
    }

    /// Deletes a patient and their appointments
    ///
    /// # Returns
    /// - `Ok(Patient)` - The deleted patient, for the confirmation message
    /// - `Err(AppError::NotFound)` - No patient with that ID
    pub async fn delete(&self, id: i32) -> Result<Patient, AppError> {
        let repo = PatientRepository::new(self.db);

        let patient = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        repo.delete(id).await?;

        tracing::info!("Deleted patient {}", id);

        Ok(patient)
    }

    async fn ensure_customer_exists(&self, customer_id: i32) -> Result<(), AppError> {
        if CustomerRepository::new(self.db)
            .find_by_id(customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Customer with id {} not found",
                customer_id
            )));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Patient with id {} not found", id))
}

fn name_taken(customer_id: i32, name: &str) -> AppError {
    AppError::Conflict(format!(
        "Customer {} already has a patient named {}",
        customer_id, name
    ))
}
