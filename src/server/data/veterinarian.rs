//! Veterinarian data repository for database operations.
//!
//! Languages are stored as a comma separated column and converted to and from
//! `Vec<Language>` at this boundary.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    enums::languages_to_column,
    veterinarian::{CreateVeterinarianParams, UpdateVeterinarianParams, Veterinarian},
};

pub struct VeterinarianRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VeterinarianRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a veterinarian.
    ///
    /// # Arguments
    /// - `params` - Validated fields; `params.password` is ignored
    /// - `password_hash` - Argon2 hash of the password
    ///
    /// # Returns
    /// - `Ok(Veterinarian)` - The created veterinarian
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(
        &self,
        params: CreateVeterinarianParams,
        password_hash: String,
    ) -> Result<Veterinarian, DbErr> {
        let entity = entity::veterinarian::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(password_hash),
            description: ActiveValue::Set(params.description),
            sex: ActiveValue::Set(params.sex.into()),
            languages: ActiveValue::Set(languages_to_column(&params.languages)),
            is_admin: ActiveValue::Set(params.is_admin),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Veterinarian::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Veterinarian>, DbErr> {
        let entity = entity::prelude::Veterinarian::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Veterinarian::from_entity))
    }

    /// Loads several veterinarians at once, keyed by ID.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, Veterinarian>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Veterinarian::from_entity(e)))
            .collect())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Veterinarian>, DbErr> {
        let entity = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Veterinarian::from_entity))
    }

    /// Checks whether another veterinarian already uses `email`.
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::veterinarian::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any veterinarian has the admin flag, used to bootstrap the first admin.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Veterinarian::find()
            .filter(entity::veterinarian::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all veterinarians ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Veterinarian>, DbErr> {
        let entities = entity::prelude::Veterinarian::find()
            .order_by_asc(entity::veterinarian::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Veterinarian::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Veterinarian))` - The updated veterinarian
    /// - `Ok(None)` - No veterinarian with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateVeterinarianParams,
        password_hash: Option<String>,
    ) -> Result<Option<Veterinarian>, DbErr> {
        let Some(existing) = entity::prelude::Veterinarian::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::veterinarian::ActiveModel = existing.into();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(hash) = password_hash {
            active.password = ActiveValue::Set(hash);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(sex) = params.sex {
            active.sex = ActiveValue::Set(sex.into());
        }
        if let Some(languages) = params.languages {
            active.languages = ActiveValue::Set(languages_to_column(&languages));
        }
        if let Some(is_admin) = params.is_admin {
            active.is_admin = ActiveValue::Set(is_admin);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Veterinarian::from_entity(entity)))
    }

    /// Deletes a veterinarian; their appointments go with them via FK cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Veterinarian::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
