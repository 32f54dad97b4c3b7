//! Customer data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::customer::{CreateCustomerParams, Customer, UpdateCustomerParams};

pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a customer.
    ///
    /// # Arguments
    /// - `params` - Validated registration fields; `params.password` is ignored
    /// - `password_hash` - Argon2 hash of the password
    ///
    /// # Returns
    /// - `Ok(Customer)` - The created customer
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(
        &self,
        params: CreateCustomerParams,
        password_hash: String,
    ) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(password_hash),
            contact_number: ActiveValue::Set(params.contact_number),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Finds a customer by (lowercased) email, used by login.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find()
            .filter(entity::customer::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Checks whether another customer already uses `email`.
    ///
    /// # Arguments
    /// - `email` - Address to check
    /// - `exclude_id` - Customer to ignore, the one being updated
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Customer::find().filter(entity::customer::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::customer::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all customers ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<Customer>, DbErr> {
        let entities = entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Arguments
    /// - `params` - Changed fields; `params.password` is ignored
    /// - `password_hash` - New password hash if the password changes
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - The updated customer
    /// - `Ok(None)` - No customer with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateCustomerParams,
        password_hash: Option<String>,
    ) -> Result<Option<Customer>, DbErr> {
        let Some(existing) = entity::prelude::Customer::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::customer::ActiveModel = existing.into();
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
        if let Some(contact_number) = params.contact_number {
            active.contact_number = ActiveValue::Set(contact_number);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Customer::from_entity(entity)))
    }

    /// Deletes a customer; patients and their appointments go with it via FK cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Customer was deleted
    /// - `Ok(false)` - No customer with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Customer::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
