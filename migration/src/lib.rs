pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_customer_table;
mod m20260105_000002_create_veterinarian_table;
mod m20260105_000003_create_patient_table;
mod m20260105_000004_create_appointment_table;
mod m20260105_000005_create_blocked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_customer_table::Migration),
            Box::new(m20260105_000002_create_veterinarian_table::Migration),
            Box::new(m20260105_000003_create_patient_table::Migration),
            Box::new(m20260105_000004_create_appointment_table::Migration),
            Box::new(m20260105_000005_create_blocked_token_table::Migration),
        ]
    }
}
