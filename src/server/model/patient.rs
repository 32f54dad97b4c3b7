//! Patient domain models and parameters.

use crate::{
    model::{
        enums::{Sex, Species},
        patient::{
            PatientAppointmentDto, PatientDto, PatientSummaryDto, RegisterPatientDto,
            UpdatePatientDto,
        },
    },
    server::{
        error::AppError,
        model::{appointment::Appointment, customer::Customer, veterinarian::Veterinarian},
        util::validate::{validate_age, validate_name, validate_weight},
    },
};

const NAME_MAX_LEN: usize = 25;

/// A customer's pet.
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub sex: Sex,
    pub species: Species,
    pub customer_id: i32,
}

impl Patient {
    pub fn from_entity(entity: entity::patient::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            weight: entity.weight,
            sex: entity.sex.into(),
            species: entity.species.into(),
            customer_id: entity.customer_id,
        }
    }

    /// Patient details nested in appointment responses.
    pub fn summary_dto(&self, owner: &Customer) -> PatientSummaryDto {
        PatientSummaryDto {
            name: self.name.clone(),
            age: self.age,
            weight: self.weight,
            sex: self.sex,
            species: self.species,
            customer_id: self.customer_id,
            customer: owner.summary_dto(),
        }
    }
}

/// An appointment listed under a patient, with its veterinarian.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientAppointment {
    pub appointment: Appointment,
    pub veterinarian: Veterinarian,
}

/// Patient with its owner and appointments, as returned by the patient endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientDetails {
    pub patient: Patient,
    pub owner: Customer,
    pub appointments: Vec<PatientAppointment>,
}

impl PatientDetails {
    pub fn into_dto(self) -> PatientDto {
        PatientDto {
            id: self.patient.id,
            name: self.patient.name,
            age: self.patient.age,
            weight: self.patient.weight,
            sex: self.patient.sex,
            species: self.patient.species,
            customer_id: self.patient.customer_id,
            customer: self.owner.summary_dto(),
            appointments: self
                .appointments
                .into_iter()
                .map(|entry| PatientAppointmentDto {
                    id: entry.appointment.id,
                    date: entry.appointment.date,
                    time: entry.appointment.time,
                    veterinarian_id: entry.appointment.veterinarian_id,
                    veterinarian: entry.veterinarian.summary_dto(),
                })
                .collect(),
        }
    }
}

/// Parameters for registering a patient to an already resolved owner.
#[derive(Debug, Clone)]
pub struct CreatePatientParams {
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub sex: Sex,
    pub species: Species,
    pub customer_id: i32,
}

impl CreatePatientParams {
    /// # Arguments
    /// - `customer_id` - Owner resolved by the controller from the token or the body
    /// - `dto` - Request body
    pub fn from_dto(customer_id: i32, dto: RegisterPatientDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            age: dto.age,
            weight: dto.weight,
            sex: dto.sex,
            species: dto.species,
            customer_id,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_name("name", &self.name, Some(NAME_MAX_LEN))?;
        validate_age(self.age)?;
        validate_weight(self.weight)?;

        Ok(())
    }
}

/// Parameters for a partial patient update; `None` leaves a column untouched.
#[derive(Debug, Clone)]
pub struct UpdatePatientParams {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub sex: Option<Sex>,
    pub species: Option<Species>,
    pub customer_id: Option<i32>,
}

impl UpdatePatientParams {
    pub fn from_dto(id: i32, dto: UpdatePatientDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            age: dto.age,
            weight: dto.weight,
            sex: dto.sex,
            species: dto.species,
            customer_id: dto.customer_id,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name("name", name, Some(NAME_MAX_LEN))?;
        }
        if let Some(age) = self.age {
            validate_age(age)?;
        }
        if let Some(weight) = self.weight {
            validate_weight(weight)?;
        }

        Ok(())
    }
}
