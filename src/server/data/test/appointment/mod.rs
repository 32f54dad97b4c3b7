use crate::server::{
    data::appointment::AppointmentRepository, model::appointment::CreateAppointmentParams,
};
use chrono::{NaiveDate, NaiveTime};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_details;
mod slot_taken;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2031, 3, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
