use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_veterinarian_table::Veterinarian,
    m20260105_000003_create_patient_table::Patient,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(pk_auto(Appointment::Id))
                    .col(date(Appointment::Date))
                    .col(time(Appointment::Time))
                    .col(integer(Appointment::VeterinarianId))
                    .col(integer(Appointment::PatientId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_veterinarian_id")
                            .from(Appointment::Table, Appointment::VeterinarianId)
                            .to(Veterinarian::Table, Veterinarian::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_patient_id")
                            .from(Appointment::Table, Appointment::PatientId)
                            .to(Patient::Table, Patient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uc_appointment_veterinarian")
                    .table(Appointment::Table)
                    .col(Appointment::Date)
                    .col(Appointment::Time)
                    .col(Appointment::VeterinarianId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uc_appointment_patient")
                    .table(Appointment::Table)
                    .col(Appointment::Date)
                    .col(Appointment::Time)
                    .col(Appointment::PatientId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Appointment {
    #[sea_orm(iden = "appointments")]
    Table,
    Id,
    Date,
    Time,
    VeterinarianId,
    PatientId,
}
