use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Veterinarian::Table)
                    .if_not_exists()
                    .col(pk_auto(Veterinarian::Id))
                    .col(string_len(Veterinarian::FirstName, 25))
                    .col(string_len(Veterinarian::LastName, 25))
                    .col(string_len_uniq(Veterinarian::Email, 50))
                    .col(string(Veterinarian::Password))
                    .col(text_null(Veterinarian::Description))
                    .col(string_len(Veterinarian::Sex, 6))
                    .col(string_null(Veterinarian::Languages))
                    .col(boolean(Veterinarian::IsAdmin).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Veterinarian::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Veterinarian {
    #[sea_orm(iden = "veterinarians")]
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    Description,
    Sex,
    Languages,
    IsAdmin,
}
