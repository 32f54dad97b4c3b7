//! Veterinarian domain models and parameters.

use crate::{
    model::{
        enums::{Language, Sex},
        veterinarian::{
            CreateVeterinarianDto, UpdateVeterinarianDto, VeterinarianDto,
            VeterinarianSummaryDto,
        },
    },
    server::{
        error::AppError,
        model::enums::languages_from_column,
        util::validate::{
            empty_to_none, validate_name, validate_password, validate_veterinarian_email,
        },
    },
};

const NAME_MAX_LEN: usize = 25;

/// Clinic staff account. Admins are veterinarians with `is_admin` set.
#[derive(Debug, Clone, PartialEq)]
pub struct Veterinarian {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 PHC hash, never leaves the server.
    pub password_hash: String,
    pub description: Option<String>,
    pub sex: Sex,
    pub languages: Vec<Language>,
    pub is_admin: bool,
}

impl Veterinarian {
    /// Converts an entity model to a veterinarian domain model at the repository boundary.
    pub fn from_entity(entity: entity::veterinarian::Model) -> Self {
        Self {
            languages: languages_from_column(entity.languages.as_deref()),
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            password_hash: entity.password,
            description: entity.description,
            sex: entity.sex.into(),
            is_admin: entity.is_admin,
        }
    }

    pub fn into_dto(self) -> VeterinarianDto {
        VeterinarianDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            description: self.description,
            sex: self.sex,
            languages: self.languages,
            is_admin: self.is_admin,
        }
    }

    pub fn summary_dto(&self) -> VeterinarianSummaryDto {
        VeterinarianSummaryDto {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Parameters for registering a veterinarian.
///
/// `password` is plaintext until the service hashes it. A blank description is `None`.
#[derive(Debug, Clone)]
pub struct CreateVeterinarianParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub description: Option<String>,
    pub sex: Sex,
    pub languages: Vec<Language>,
    pub is_admin: bool,
}

impl CreateVeterinarianParams {
    pub fn from_dto(dto: CreateVeterinarianDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            description: empty_to_none(dto.description),
            sex: dto.sex,
            languages: dto.languages,
            is_admin: dto.is_admin,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_name("first_name", &self.first_name, Some(NAME_MAX_LEN))?;
        validate_name("last_name", &self.last_name, Some(NAME_MAX_LEN))?;
        validate_veterinarian_email(&self.email)?;
        validate_password(&self.password)?;

        Ok(())
    }
}

/// Parameters for a partial veterinarian update.
///
/// For `description` and `languages` the outer `Option` says whether the column changes;
/// `Some(None)` / `Some(vec![])` clear it.
#[derive(Debug, Clone)]
pub struct UpdateVeterinarianParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub description: Option<Option<String>>,
    pub sex: Option<Sex>,
    pub languages: Option<Vec<Language>>,
    pub is_admin: Option<bool>,
}

impl UpdateVeterinarianParams {
    pub fn from_dto(id: i32, dto: UpdateVeterinarianDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email.map(|email| email.trim().to_lowercase()),
            password: dto.password,
            description: dto.description.map(|d| empty_to_none(Some(d))),
            sex: dto.sex,
            languages: dto.languages,
            is_admin: dto.is_admin,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(first_name) = &self.first_name {
            validate_name("first_name", first_name, Some(NAME_MAX_LEN))?;
        }
        if let Some(last_name) = &self.last_name {
            validate_name("last_name", last_name, Some(NAME_MAX_LEN))?;
        }
        if let Some(email) = &self.email {
            validate_veterinarian_email(email)?;
        }
        if let Some(password) = &self.password {
            validate_password(password)?;
        }

        Ok(())
    }
}
