//! Appointment domain models and parameters.

use chrono::{NaiveDate, NaiveTime};

use crate::{
    model::appointment::{AppointmentDto, BookAppointmentDto, UpdateAppointmentDto},
    server::{
        error::AppError,
        model::{customer::Customer, patient::Patient, veterinarian::Veterinarian},
        util::validate::validate_appointment_time,
    },
};

/// A booked slot between one veterinarian and one patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub veterinarian_id: i32,
    pub patient_id: i32,
}

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            time: entity.time,
            veterinarian_id: entity.veterinarian_id,
            patient_id: entity.patient_id,
        }
    }
}

/// Appointment with the veterinarian, patient and patient owner it references.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub veterinarian: Veterinarian,
    pub patient: Patient,
    pub owner: Customer,
}

impl AppointmentDetails {
    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.appointment.id,
            date: self.appointment.date,
            time: self.appointment.time,
            veterinarian_id: self.appointment.veterinarian_id,
            veterinarian: self.veterinarian.summary_dto(),
            patient_id: self.appointment.patient_id,
            patient: self.patient.summary_dto(&self.owner),
        }
    }
}

/// Parameters for booking an appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub veterinarian_id: i32,
    pub patient_id: i32,
}

impl CreateAppointmentParams {
    pub fn from_dto(dto: BookAppointmentDto) -> Self {
        Self {
            date: dto.date,
            time: dto.time,
            veterinarian_id: dto.veterinarian_id,
            patient_id: dto.patient_id,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_appointment_time(self.time)
    }
}

/// Parameters for a partial appointment update; `None` leaves a column untouched.
#[derive(Debug, Clone)]
pub struct UpdateAppointmentParams {
    pub id: i32,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub veterinarian_id: Option<i32>,
    pub patient_id: Option<i32>,
}

impl UpdateAppointmentParams {
    pub fn from_dto(id: i32, dto: UpdateAppointmentDto) -> Self {
        Self {
            id,
            date: dto.date,
            time: dto.time,
            veterinarian_id: dto.veterinarian_id,
            patient_id: dto.patient_id,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(time) = self.time {
            validate_appointment_time(time)?;
        }

        Ok(())
    }

    /// Applies the changes on top of the stored appointment, giving the resulting slot.
    pub fn apply_to(&self, current: &Appointment) -> CreateAppointmentParams {
        CreateAppointmentParams {
            date: self.date.unwrap_or(current.date),
            time: self.time.unwrap_or(current.time),
            veterinarian_id: self.veterinarian_id.unwrap_or(current.veterinarian_id),
            patient_id: self.patient_id.unwrap_or(current.patient_id),
        }
    }
}
