use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::enums::{Language, Sex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VeterinarianDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub description: Option<String>,
    pub sex: Sex,
    pub languages: Vec<Language>,
    pub is_admin: bool,
}

/// Veterinarian details nested inside patient and appointment responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VeterinarianSummaryDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVeterinarianDto {
    pub first_name: String,
    pub last_name: String,
    /// Clinic address, e.g. `jane.doe@vet.com`
    pub email: String,
    pub password: String,
    pub sex: Sex,
    #[serde(default)]
    pub languages: Vec<Language>,
    pub description: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Partial update, absent fields are left unchanged.
///
/// An empty `description` or empty `languages` list clears the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateVeterinarianDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub description: Option<String>,
    pub sex: Option<Sex>,
    pub languages: Option<Vec<Language>>,
    /// Only admins may change this
    pub is_admin: Option<bool>,
}
