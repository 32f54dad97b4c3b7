//! Revoked token registry.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct TokenBlocklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenBlocklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a token ID as revoked.
    pub async fn revoke(&self, jti: &str) -> Result<(), DbErr> {
        entity::token_blocklist::ActiveModel {
            jti: ActiveValue::Set(jti.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    pub async fn is_revoked(&self, jti: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::TokenBlocklist::find()
            .filter(entity::token_blocklist::Column::Jti.eq(jti))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes entries recorded before `cutoff`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries removed
    pub async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::TokenBlocklist::delete_many()
            .filter(entity::token_blocklist::Column::CreatedAt.lt(cutoff))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
