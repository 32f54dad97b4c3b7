//! Patient factory for creating test patient entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{Sex, Species};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test patients with customizable fields.
///
/// The owning customer must already exist.
pub struct PatientFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    name: String,
    age: i32,
    weight: f64,
    sex: Sex,
    species: Species,
}

impl<'a> PatientFactory<'a> {
    /// Creates a new PatientFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Pet {id}"`
    /// - age: `3`
    /// - weight: `12.5`
    /// - sex: `Male`
    /// - species: `Dog`
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            customer_id,
            name: format!("Pet {}", id),
            age: 3,
            weight: 12.5,
            sex: Sex::Male,
            species: Species::Dog,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn species(mut self, species: Species) -> Self {
        self.species = species;
        self
    }

    /// Builds and inserts the patient entity into the database.
    pub async fn build(self) -> Result<entity::patient::Model, DbErr> {
        entity::patient::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            weight: ActiveValue::Set(self.weight),
            sex: ActiveValue::Set(self.sex),
            species: ActiveValue::Set(self.species),
            customer_id: ActiveValue::Set(self.customer_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a patient with default values for the given customer.
pub async fn create_patient(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::patient::Model, DbErr> {
    PatientFactory::new(db, customer_id).build().await
}
