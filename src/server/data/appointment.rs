//! Appointment data repository for database operations.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::veterinarian::VeterinarianRepository,
    model::{
        appointment::{Appointment, AppointmentDetails, CreateAppointmentParams},
        customer::Customer,
        patient::Patient,
    },
};

pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an appointment.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(DbErr)` - Database error, including unique violations when the slot is taken
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let entity = entity::appointment::ActiveModel {
            date: ActiveValue::Set(params.date),
            time: ActiveValue::Set(params.time),
            veterinarian_id: ActiveValue::Set(params.veterinarian_id),
            patient_id: ActiveValue::Set(params.patient_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Gets an appointment with its veterinarian, patient and patient owner.
    pub async fn get_details(&self, id: i32) -> Result<Option<AppointmentDetails>, DbErr> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_details(vec![entity]).await?.pop())
    }

    /// Gets every appointment, ordered by date and time.
    pub async fn get_all_details(&self) -> Result<Vec<AppointmentDetails>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::Time)
            .all(self.db)
            .await?;

        self.load_details(entities).await
    }

    /// Gets a veterinarian's appointments, ordered by date and time.
    pub async fn get_details_by_veterinarian(
        &self,
        veterinarian_id: i32,
    ) -> Result<Vec<AppointmentDetails>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::VeterinarianId.eq(veterinarian_id))
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::Time)
            .all(self.db)
            .await?;

        self.load_details(entities).await
    }

    /// Gets the appointments of every patient a customer owns, ordered by date and time.
    pub async fn get_details_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<AppointmentDetails>, DbErr> {
        let patient_ids: Vec<i32> = entity::prelude::Patient::find()
            .select_only()
            .column(entity::patient::Column::Id)
            .filter(entity::patient::Column::CustomerId.eq(customer_id))
            .into_tuple()
            .all(self.db)
            .await?;

        if patient_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PatientId.is_in(patient_ids))
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::Time)
            .all(self.db)
            .await?;

        self.load_details(entities).await
    }

    /// Checks if the veterinarian already has an appointment at this date and time.
    ///
    /// # Arguments
    /// - `exclude_id` - Appointment to ignore, the one being updated
    pub async fn veterinarian_slot_taken(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        veterinarian_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Date.eq(date))
            .filter(entity::appointment::Column::Time.eq(time))
            .filter(entity::appointment::Column::VeterinarianId.eq(veterinarian_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::appointment::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if the patient already has an appointment at this date and time.
    pub async fn patient_slot_taken(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        patient_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::Date.eq(date))
            .filter(entity::appointment::Column::Time.eq(time))
            .filter(entity::appointment::Column::PatientId.eq(patient_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::appointment::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Moves an appointment to the given slot.
    ///
    /// # Arguments
    /// - `id` - Appointment to update
    /// - `slot` - Full set of resulting values, see `UpdateAppointmentParams::apply_to`
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The updated appointment
    /// - `Ok(None)` - No appointment with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        slot: CreateAppointmentParams,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(existing) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::appointment::ActiveModel = existing.into();
        active.date = ActiveValue::Set(slot.date);
        active.time = ActiveValue::Set(slot.time);
        active.veterinarian_id = ActiveValue::Set(slot.veterinarian_id);
        active.patient_id = ActiveValue::Set(slot.patient_id);

        let entity = active.update(self.db).await?;

        Ok(Some(Appointment::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_details(
        &self,
        appointments: Vec<entity::appointment::Model>,
    ) -> Result<Vec<AppointmentDetails>, DbErr> {
        if appointments.is_empty() {
            return Ok(Vec::new());
        }

        let veterinarian_ids: Vec<i32> = appointments.iter().map(|a| a.veterinarian_id).collect();
        let veterinarians = VeterinarianRepository::new(self.db)
            .find_by_ids(veterinarian_ids)
            .await?;

        let patient_ids: Vec<i32> = appointments.iter().map(|a| a.patient_id).collect();
        let patients: HashMap<i32, Patient> = entity::prelude::Patient::find()
            .filter(entity::patient::Column::Id.is_in(patient_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| (p.id, Patient::from_entity(p)))
            .collect();

        let customer_ids: Vec<i32> = patients.values().map(|p| p.customer_id).collect();
        let owners: HashMap<i32, Customer> = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Id.is_in(customer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, Customer::from_entity(c)))
            .collect();

        appointments
            .into_iter()
            .map(|appointment| {
                let missing = |what: &str, id: i32| {
                    DbErr::RecordNotFound(format!(
                        "{} {} of appointment {} not found",
                        what, id, appointment.id
                    ))
                };

                let veterinarian = veterinarians
                    .get(&appointment.veterinarian_id)
                    .cloned()
                    .ok_or_else(|| missing("Veterinarian", appointment.veterinarian_id))?;
                let patient = patients
                    .get(&appointment.patient_id)
                    .cloned()
                    .ok_or_else(|| missing("Patient", appointment.patient_id))?;
                let owner = owners
                    .get(&patient.customer_id)
                    .cloned()
                    .ok_or_else(|| missing("Owner", patient.customer_id))?;

                Ok(AppointmentDetails {
                    appointment: Appointment::from_entity(appointment),
                    veterinarian,
                    patient,
                    owner,
                })
            })
            .collect()
    }
}
