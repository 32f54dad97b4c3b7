use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    patient::PatientSummaryDto, time_format, veterinarian::VeterinarianSummaryDto,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "09:30")]
    pub time: NaiveTime,
    pub veterinarian_id: i32,
    pub veterinarian: VeterinarianSummaryDto,
    pub patient_id: i32,
    pub patient: PatientSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookAppointmentDto {
    pub date: NaiveDate,
    /// Quarter hour slot, `HH:MM` with minutes 00, 15, 30 or 45
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "09:30")]
    pub time: NaiveTime,
    pub veterinarian_id: i32,
    pub patient_id: i32,
}

/// Partial update, absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateAppointmentDto {
    pub date: Option<NaiveDate>,
    #[serde(default, with = "time_format::option")]
    #[schema(value_type = Option<String>, example = "10:15")]
    pub time: Option<NaiveTime>,
    pub veterinarian_id: Option<i32>,
    pub patient_id: Option<i32>,
}
