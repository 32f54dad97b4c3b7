//! Patient data repository for database operations.
//!
//! Detail queries batch-load owners, appointments and veterinarians with one query per
//! table instead of one per patient.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::veterinarian::VeterinarianRepository,
    model::{
        appointment::Appointment,
        customer::Customer,
        patient::{
            CreatePatientParams, Patient, PatientAppointment, PatientDetails, UpdatePatientParams,
        },
    },
};

pub struct PatientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PatientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a patient.
    ///
    /// # Returns
    /// - `Ok(Patient)` - The created patient
    /// - `Err(DbErr)` - Database error, including FK violations for an unknown owner and
    ///   unique violations on (customer_id, name)
    pub async fn create(&self, params: CreatePatientParams) -> Result<Patient, DbErr> {
        let entity = entity::patient::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            weight: ActiveValue::Set(params.weight),
            sex: ActiveValue::Set(params.sex.into()),
            species: ActiveValue::Set(params.species.into()),
            customer_id: ActiveValue::Set(params.customer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Patient::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Patient>, DbErr> {
        let entity = entity::prelude::Patient::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Patient::from_entity))
    }

    /// Gets a patient with its owner and appointments.
    pub async fn get_details(&self, id: i32) -> Result<Option<PatientDetails>, DbErr> {
        let Some(entity) = entity::prelude::Patient::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![entity]).await?.pop())
    }

    /// Gets every patient with details, ordered by ID.
    pub async fn get_all_details(&self) -> Result<Vec<PatientDetails>, DbErr> {
        let entities = entity::prelude::Patient::find()
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await?;

        self.load_details(entities).await
    }

    /// Gets the patients owned by a customer with details, ordered by ID.
    pub async fn get_details_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<PatientDetails>, DbErr> {
        let entities = entity::prelude::Patient::find()
            .filter(entity::patient::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::patient::Column::Id)
            .all(self.db)
            .await?;

        self.load_details(entities).await
    }

    /// Checks whether the customer already has a patient with this name.
    ///
    /// # Arguments
    /// - `customer_id` - Owner to check within
    /// - `name` - Patient name
    /// - `exclude_id` - Patient to ignore, the one being updated
    pub async fn name_taken(
        &self,
        customer_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Patient::find()
            .filter(entity::patient::Column::CustomerId.eq(customer_id))
            .filter(entity::patient::Column::Name.eq(name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::patient::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Patient))` - The updated patient
    /// - `Ok(None)` - No patient with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdatePatientParams) -> Result<Option<Patient>, DbErr> {
        let Some(existing) = entity::prelude::Patient::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::patient::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(age) = params.age {
            active.age = ActiveValue::Set(age);
        }
        if let Some(weight) = params.weight {
            active.weight = ActiveValue::Set(weight);
        }
        if let Some(sex) = params.sex {
            active.sex = ActiveValue::Set(sex.into());
        }
        if let Some(species) = params.species {
            active.species = ActiveValue::Set(species.into());
        }
        if let Some(customer_id) = params.customer_id {
            active.customer_id = ActiveValue::Set(customer_id);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Patient::from_entity(entity)))
    }

    /// Deletes a patient; its appointments go with it via FK cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Patient::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn load_details(
        &self,
        patients: Vec<entity::patient::Model>,
    ) -> Result<Vec<PatientDetails>, DbErr> {
        if patients.is_empty() {
            return Ok(Vec::new());
        }

        let customer_ids: Vec<i32> = patients.iter().map(|p| p.customer_id).collect();
        let owners: HashMap<i32, Customer> = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Id.is_in(customer_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, Customer::from_entity(c)))
            .collect();

        let patient_ids: Vec<i32> = patients.iter().map(|p| p.id).collect();
        let appointments = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PatientId.is_in(patient_ids))
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::Time)
            .all(self.db)
            .await?;

        let mut veterinarian_ids: Vec<i32> =
            appointments.iter().map(|a| a.veterinarian_id).collect();
        veterinarian_ids.sort_unstable();
        veterinarian_ids.dedup();
        let veterinarians = VeterinarianRepository::new(self.db)
            .find_by_ids(veterinarian_ids)
            .await?;

        let mut appointments_by_patient: HashMap<i32, Vec<PatientAppointment>> = HashMap::new();
        for appointment in appointments {
            let veterinarian = veterinarians
                .get(&appointment.veterinarian_id)
                .cloned()
                .ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Veterinarian {} of appointment {} not found",
                        appointment.veterinarian_id, appointment.id
                    ))
                })?;

            appointments_by_patient
                .entry(appointment.patient_id)
                .or_default()
                .push(PatientAppointment {
                    appointment: Appointment::from_entity(appointment),
                    veterinarian,
                });
        }

        patients
            .into_iter()
            .map(|patient| {
                let owner = owners.get(&patient.customer_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Owner {} of patient {} not found",
                        patient.customer_id, patient.id
                    ))
                })?;
                let appointments = appointments_by_patient
                    .remove(&patient.id)
                    .unwrap_or_default();

                Ok(PatientDetails {
                    patient: Patient::from_entity(patient),
                    owner,
                    appointments,
                })
            })
            .collect()
    }
}
