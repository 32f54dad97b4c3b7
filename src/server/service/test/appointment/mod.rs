use crate::server::{
    error::AppError,
    model::appointment::{CreateAppointmentParams, UpdateAppointmentParams},
    service::appointment::AppointmentService,
};
use chrono::{NaiveDate, NaiveTime};
use test_utils::{builder::TestBuilder, factory};

mod book;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2032, 7, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn empty_update(id: i32) -> UpdateAppointmentParams {
    UpdateAppointmentParams {
        id,
        date: None,
        time: None,
        veterinarian_id: None,
        patient_id: None,
    }
}
