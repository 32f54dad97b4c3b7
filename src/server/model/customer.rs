//! Customer domain models and parameters.

use crate::{
    model::customer::{CustomerDto, CustomerSummaryDto, RegisterCustomerDto, UpdateCustomerDto},
    server::{
        error::AppError,
        util::validate::{
            validate_contact_number, validate_customer_email, validate_name, validate_password,
        },
    },
};

/// Pet owner account.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 PHC hash, never leaves the server.
    pub password_hash: String,
    pub contact_number: i64,
}

impl Customer {
    /// Converts an entity model to a customer domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password,
            contact_number: entity.contact_number,
        }
    }

    /// Converts the customer to a DTO for API responses, dropping the password hash.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            contact_number: self.contact_number,
        }
    }

    /// Owner details nested in patient and appointment responses.
    pub fn summary_dto(&self) -> CustomerSummaryDto {
        CustomerSummaryDto {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            contact_number: self.contact_number,
        }
    }
}

/// Parameters for registering a new customer.
///
/// `password` is plaintext until the service hashes it.
#[derive(Debug, Clone)]
pub struct CreateCustomerParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub contact_number: i64,
}

impl CreateCustomerParams {
    pub fn from_dto(dto: RegisterCustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            contact_number: dto.contact_number,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_name("first_name", &self.first_name, None)?;
        validate_name("last_name", &self.last_name, None)?;
        validate_customer_email(&self.email)?;
        validate_password(&self.password)?;
        validate_contact_number(self.contact_number)?;

        Ok(())
    }
}

/// Parameters for a partial customer update; `None` leaves a column untouched.
#[derive(Debug, Clone)]
pub struct UpdateCustomerParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub contact_number: Option<i64>,
}

impl UpdateCustomerParams {
    pub fn from_dto(id: i32, dto: UpdateCustomerDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email.map(|email| email.trim().to_lowercase()),
            password: dto.password,
            contact_number: dto.contact_number,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(first_name) = &self.first_name {
            validate_name("first_name", first_name, None)?;
        }
        if let Some(last_name) = &self.last_name {
            validate_name("last_name", last_name, None)?;
        }
        if let Some(email) = &self.email {
            validate_customer_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        if let Some(contact_number) = self.contact_number {
            validate_contact_number(contact_number)?;
        }

        Ok(())
    }
}
