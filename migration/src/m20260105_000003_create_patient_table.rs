use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_customer_table::Customer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patient::Table)
                    .if_not_exists()
                    .col(pk_auto(Patient::Id))
                    .col(string_len(Patient::Name, 25))
                    .col(integer(Patient::Age))
                    .col(double(Patient::Weight))
                    .col(string_len(Patient::Sex, 6))
                    .col(string_len(Patient::Species, 10))
                    .col(integer(Patient::CustomerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_patient_customer_id")
                            .from(Patient::Table, Patient::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A customer can't have two pets with the same name
        manager
            .create_index(
                Index::create()
                    .name("uc_customer_patient")
                    .table(Patient::Table)
                    .col(Patient::CustomerId)
                    .col(Patient::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Patient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Patient {
    #[sea_orm(iden = "patients")]
    Table,
    Id,
    Name,
    Age,
    Weight,
    Sex,
    Species,
    CustomerId,
}
