use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        appointment::AppointmentRepository, patient::PatientRepository,
        veterinarian::VeterinarianRepository,
    },
    error::AppError,
    model::appointment::{
        Appointment, AppointmentDetails, CreateAppointmentParams, UpdateAppointmentParams,
    },
};

pub struct AppointmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every appointment
    pub async fn get_all(&self) -> Result<Vec<AppointmentDetails>, AppError> {
        Ok(AppointmentRepository::new(self.db).get_all_details().await?)
    }

    /// Gets the appointments of one veterinarian
    pub async fn get_by_veterinarian(
        &self,
        veterinarian_id: i32,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        Ok(AppointmentRepository::new(self.db)
            .get_details_by_veterinarian(veterinarian_id)
            .await?)
    }

    /// Gets the appointments of every patient a customer owns
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<AppointmentDetails>, AppError> {
        Ok(AppointmentRepository::new(self.db)
            .get_details_by_customer(customer_id)
            .await?)
    }

    /// Gets an appointment with its participants or fails with 404
    pub async fn get_by_id(&self, id: i32) -> Result<AppointmentDetails, AppError> {
        AppointmentRepository::new(self.db)
            .get_details(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Books an appointment
    ///
    /// # Returns
    /// - `Ok(AppointmentDetails)` - The booked appointment
    /// - `Err(AppError::BadRequest)` - Time is not on a quarter hour
    /// - `Err(AppError::NotFound)` - Veterinarian or patient doesn't exist
    /// - `Err(AppError::Conflict)` - Veterinarian or patient already booked at that slot
    pub async fn book(
        &self,
        params: CreateAppointmentParams,
    ) -> Result<AppointmentDetails, AppError> {
        params.validate()?;

        self.ensure_participants_exist(&params).await?;
        self.ensure_slot_free(&params, None).await?;

        let appointment = AppointmentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Booked appointment {} for patient {} with veterinarian {}",
            appointment.id,
            appointment.patient_id,
            appointment.veterinarian_id
        );

        self.get_by_id(appointment.id).await
    }

    /// Validates and applies a partial update with the same checks as booking
    pub async fn update(
        &self,
        params: UpdateAppointmentParams,
    ) -> Result<AppointmentDetails, AppError> {
        params.validate()?;

        let repo = AppointmentRepository::new(self.db);

        let existing = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| not_found(params.id))?;

        let slot = params.apply_to(&existing);

        self.ensure_participants_exist(&slot).await?;
        self.ensure_slot_free(&slot, Some(existing.id)).await?;

        repo.update(existing.id, slot)
            .await?
            .ok_or_else(|| not_found(existing.id))?;

        self.get_by_id(existing.id).await
    }

    /// Deletes an appointment
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The deleted appointment, for the confirmation message
    /// - `Err(AppError::NotFound)` - No appointment with that ID
    pub async fn delete(&self, id: i32) -> Result<Appointment, AppError> {
        let repo = AppointmentRepository::new(self.db);

        let appointment = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        repo.delete(id).await?;

        tracing::info!("Deleted appointment {}", id);

        Ok(appointment)
    }

    async fn ensure_participants_exist(
        &self,
        slot: &CreateAppointmentParams,
    ) -> Result<(), AppError> {
        if VeterinarianRepository::new(self.db)
            .find_by_id(slot.veterinarian_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Veterinarian with id {} not found",
                slot.veterinarian_id
            )));
        }

        if PatientRepository::new(self.db)
            .find_by_id(slot.patient_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Patient with id {} not found",
                slot.patient_id
            )));
        }

        Ok(())
    }

    async fn ensure_slot_free(
        &self,
        slot: &CreateAppointmentParams,
        exclude_id: Option<i32>,
    ) -> Result<(), AppError> {
        let repo = AppointmentRepository::new(self.db);
        let at = format!("{} on {}", slot.time.format("%H:%M"), slot.date);

        if repo
            .veterinarian_slot_taken(slot.date, slot.time, slot.veterinarian_id, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Veterinarian {} already has an appointment at {}",
                slot.veterinarian_id, at
            )));
        }

        if repo
            .patient_slot_taken(slot.date, slot.time, slot.patient_id, exclude_id)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Patient {} already has an appointment at {}",
                slot.patient_id, at
            )));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Appointment with id {} not found", id))
}
