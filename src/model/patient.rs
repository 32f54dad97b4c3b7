use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    customer::CustomerSummaryDto,
    enums::{Sex, Species},
    time_format,
    veterinarian::VeterinarianSummaryDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub sex: Sex,
    pub species: Species,
    pub customer_id: i32,
    pub customer: CustomerSummaryDto,
    pub appointments: Vec<PatientAppointmentDto>,
}

/// Appointment as listed under a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientAppointmentDto {
    pub id: i32,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "09:30")]
    pub time: NaiveTime,
    pub veterinarian_id: i32,
    pub veterinarian: VeterinarianSummaryDto,
}

/// Patient details nested inside appointment responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientSummaryDto {
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub sex: Sex,
    pub species: Species,
    pub customer_id: i32,
    pub customer: CustomerSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterPatientDto {
    pub name: String,
    pub age: i32,
    pub weight: f64,
    pub sex: Sex,
    pub species: Species,
    /// Owner of the patient. Customers may omit it to register for themselves,
    /// admins must provide it.
    pub customer_id: Option<i32>,
}

/// Partial update, absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePatientDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub weight: Option<f64>,
    pub sex: Option<Sex>,
    pub species: Option<Species>,
    /// Only admins may transfer a patient to another customer
    pub customer_id: Option<i32>,
}
