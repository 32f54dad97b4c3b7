//! Appointment factory for creating test appointment entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments with customizable fields.
///
/// The veterinarian and patient must already exist.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    veterinarian_id: i32,
    patient_id: i32,
    date: NaiveDate,
    time: NaiveTime,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - date: a unique day after 2030-01-01 so default appointments never collide
    /// - time: `09:00`
    pub fn new(db: &'a DatabaseConnection, veterinarian_id: i32, patient_id: i32) -> Self {
        let id = next_id();
        let base = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap_or_default();
        Self {
            db,
            veterinarian_id,
            patient_id,
            date: base + Duration::days(id as i64),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Builds and inserts the appointment entity into the database.
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        entity::appointment::ActiveModel {
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            veterinarian_id: ActiveValue::Set(self.veterinarian_id),
            patient_id: ActiveValue::Set(self.patient_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an appointment with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    veterinarian_id: i32,
    patient_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, veterinarian_id, patient_id)
        .build()
        .await
}
