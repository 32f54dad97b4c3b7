use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Customer, Patient};
///
/// let test = TestBuilder::new()
///     .with_table(Customer)
///     .with_table(Patient)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in the order they were added.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements, executed once every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement (and any single column indexes) from the provided
    /// SeaORM entity using SQLite backend syntax. Tables with foreign keys should be added
    /// after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes.extend(schema.create_index_from_entity(entity));
        self
    }

    /// Adds a raw index statement, used for composite unique constraints that the entity
    /// derive can't express.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every clinic table in dependency order together with the composite unique
    /// constraints applied by the migrations:
    /// - Customer
    /// - Veterinarian
    /// - Patient, unique on (customer_id, name)
    /// - Appointment, unique on (date, time, veterinarian_id) and (date, time, patient_id)
    /// - TokenBlocklist
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_clinic_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(Veterinarian)
            .with_table(Patient)
            .with_table(Appointment)
            .with_table(TokenBlocklist)
            .with_index(
                Index::create()
                    .name("uc_customer_patient")
                    .table(Patient)
                    .col(entity::patient::Column::CustomerId)
                    .col(entity::patient::Column::Name)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("uc_appointment_veterinarian")
                    .table(Appointment)
                    .col(entity::appointment::Column::Date)
                    .col(entity::appointment::Column::Time)
                    .col(entity::appointment::Column::VeterinarianId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("uc_appointment_patient")
                    .table(Appointment)
                    .col(entity::appointment::Column::Date)
                    .col(entity::appointment::Column::Time)
                    .col(entity::appointment::Column::PatientId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_schema(self.tables, self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
