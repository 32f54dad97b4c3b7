use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::Role,
    server::{
        data::{
            appointment::AppointmentRepository, customer::CustomerRepository,
            patient::PatientRepository, token_blocklist::TokenBlocklistRepository,
            veterinarian::VeterinarianRepository,
        },
        error::{auth::AuthError, AppError},
        model::auth::{AuthUser, Claims},
        state::AppState,
    },
};

/// Verified claims of the request's `Authorization: Bearer <jwt>` header.
///
/// Extraction only checks signature and expiry; revocation and the subject row are
/// checked by `AuthGuard`.
pub struct BearerToken(pub Claims);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.decode(token)?;

        Ok(Self(claims))
    }
}

pub enum Permission {
    /// Veterinarian with the admin flag
    Admin,
    /// Any veterinarian, admins included
    Staff,
    /// The customer with this ID, or an admin
    CustomerOrAdmin(i32),
    /// The veterinarian with this ID, or an admin
    VeterinarianOrAdmin(i32),
    /// Any veterinarian, or the customer owning this patient
    PatientAccess(i32),
    /// The customer owning this patient, or an admin
    PatientOwner(i32),
    /// The appointment's veterinarian, the owner of its patient, or an admin
    AppointmentAccess(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    claims: &'a Claims,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, claims: &'a Claims) -> Self {
        Self { db, claims }
    }

    /// Resolves the account behind the token.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The customer or veterinarian the token was issued to
    /// - `Err(AuthError::TokenRevoked)` - The token's `jti` is blocklisted
    /// - `Err(AuthError::SubjectNotFound)` - The account was deleted after issuing
    pub async fn authenticate(&self) -> Result<AuthUser, AppError> {
        if TokenBlocklistRepository::new(self.db)
            .is_revoked(&self.claims.jti)
            .await?
        {
            return Err(AuthError::TokenRevoked(self.claims.jti.clone()).into());
        }

        let id = self.claims.subject_id()?;

        let user = match self.claims.role {
            Role::Customer => CustomerRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(AuthUser::Customer),
            Role::Veterinarian => VeterinarianRepository::new(self.db)
                .find_by_id(id)
                .await?
                .map(AuthUser::Veterinarian),
        };

        user.ok_or_else(|| AuthError::SubjectNotFound(self.claims.role, id).into())
    }

    /// Authenticates and checks that every permission holds.
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let user = self.authenticate().await?;

        self.authorize(&user, permissions).await?;

        Ok(user)
    }

    /// Checks that every permission holds for an already authenticated user.
    ///
    /// Ownership checks against a missing row fail for non-admins, so callers only
    /// learn about existence once access is established.
    pub async fn authorize(&self, user: &AuthUser, permissions: &[Permission]) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(denied("Admin access required"));
                    }
                }
                Permission::Staff => {
                    if user.veterinarian_id().is_none() {
                        return Err(denied("Veterinarian access required"));
                    }
                }
                Permission::CustomerOrAdmin(customer_id) => {
                    if !user.is_admin() && user.customer_id() != Some(*customer_id) {
                        return Err(denied(format!(
                            "Not authorized to access customer {}",
                            customer_id
                        )));
                    }
                }
                Permission::VeterinarianOrAdmin(veterinarian_id) => {
                    if !user.is_admin() && user.veterinarian_id() != Some(*veterinarian_id) {
                        return Err(denied(format!(
                            "Not authorized to access veterinarian {}",
                            veterinarian_id
                        )));
                    }
                }
                Permission::PatientAccess(patient_id) => {
                    if user.veterinarian_id().is_none()
                        && !self.owns_patient(user, *patient_id).await?
                    {
                        return Err(denied(format!(
                            "Not authorized to access patient {}",
                            patient_id
                        )));
                    }
                }
                Permission::PatientOwner(patient_id) => {
                    if !user.is_admin() && !self.owns_patient(user, *patient_id).await? {
                        return Err(denied(format!(
                            "Not authorized to modify patient {}",
                            patient_id
                        )));
                    }
                }
                Permission::AppointmentAccess(appointment_id) => {
                    if !user.is_admin() && !self.takes_part_in(user, *appointment_id).await? {
                        return Err(denied(format!(
                            "Not authorized to access appointment {}",
                            appointment_id
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    async fn owns_patient(&self, user: &AuthUser, patient_id: i32) -> Result<bool, AppError> {
        let Some(customer_id) = user.customer_id() else {
            return Ok(false);
        };

        let patient = PatientRepository::new(self.db).find_by_id(patient_id).await?;

        Ok(patient.is_some_and(|p| p.customer_id == customer_id))
    }

    async fn takes_part_in(&self, user: &AuthUser, appointment_id: i32) -> Result<bool, AppError> {
        let Some(appointment) = AppointmentRepository::new(self.db)
            .find_by_id(appointment_id)
            .await?
        else {
            return Ok(false);
        };

        match user {
            AuthUser::Veterinarian(veterinarian) => {
                Ok(appointment.veterinarian_id == veterinarian.id)
            }
            AuthUser::Customer(_) => self.owns_patient(user, appointment.patient_id).await,
        }
    }
}

fn denied(message: impl Into<String>) -> AppError {
    AuthError::AccessDenied(message.into()).into()
}
