use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlockedToken::Table)
                    .if_not_exists()
                    .col(pk_auto(BlockedToken::Id))
                    .col(string_len(BlockedToken::Jti, 36))
                    .col(timestamp_with_time_zone(BlockedToken::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_blocked_token_jti")
                    .table(BlockedToken::Table)
                    .col(BlockedToken::Jti)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockedToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlockedToken {
    #[sea_orm(iden = "blocked_tokens")]
    Table,
    Id,
    Jti,
    CreatedAt,
}
