use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        patient::{PatientDto, RegisterPatientDto, UpdatePatientDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::patient::{CreatePatientParams, UpdatePatientParams},
        service::patient::PatientService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping patient endpoints in OpenAPI documentation
pub static PATIENT_TAG: &str = "patient";

/// List patients.
///
/// Veterinarians (admins included) get every patient; a customer gets their own.
#[utoipa::path(
    get,
    path = "/patients",
    tag = PATIENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visible patients", body = Vec<PatientDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patients(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &claims);
    let user = guard.authenticate().await?;

    let service = PatientService::new(&state.db);
    let patients = match user.customer_id() {
        Some(customer_id) => service.get_by_customer(customer_id).await?,
        None => {
            guard.authorize(&user, &[Permission::Staff]).await?;
            service.get_all().await?
        }
    };

    Ok(Json(
        patients
            .into_iter()
            .map(|p| p.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a patient with owner and appointments.
///
/// # Access Control
/// - `PatientAccess` - Any veterinarian or the owning customer
#[utoipa::path(
    get,
    path = "/patients/{id}",
    tag = PATIENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "The patient", body = PatientDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or a veterinarian", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_patient(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::PatientAccess(id)])
        .await?;

    let patient = PatientService::new(&state.db).get_by_id(id).await?;

    Ok(Json(patient.into_dto()))
}

/// Register a patient.
///
/// A customer registers for themself; the owner is taken from the token and a body
/// `customer_id` naming someone else is rejected. An admin must name the owner with
/// `customer_id`.
///
/// # Access Control
/// - `CustomerOrAdmin` - For the resolved owner
///
/// # Returns
/// - `201 Created` - The registered patient
/// - `400 Bad Request` - A field failed validation or an admin omitted `customer_id`
/// - `404 Not Found` - Owner doesn't exist
/// - `409 Conflict` - Owner already has a patient with this name
#[utoipa::path(
    post,
    path = "/patients/register",
    tag = PATIENT_TAG,
    security(("bearer_auth" = [])),
    request_body = RegisterPatientDto,
    responses(
        (status = 201, description = "Patient registered", body = PatientDto),
        (status = 400, description = "Invalid patient data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to register for this customer", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Duplicate patient name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_patient(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppJson(payload): AppJson<RegisterPatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &claims);
    let user = guard.authenticate().await?;

    let customer_id = match user.customer_id() {
        Some(own_id) => payload.customer_id.unwrap_or(own_id),
        None => {
            guard.authorize(&user, &[Permission::Admin]).await?;
            payload.customer_id.ok_or_else(|| {
                AppError::BadRequest("customer_id is required".to_string())
            })?
        }
    };

    guard
        .authorize(&user, &[Permission::CustomerOrAdmin(customer_id)])
        .await?;

    let params = CreatePatientParams::from_dto(customer_id, payload);
    let patient = PatientService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(patient.into_dto())))
}

/// Update a patient.
///
/// # Access Control
/// - `PatientOwner` - The owning customer or an admin
/// - `Admin` - Additionally required to move the patient to another customer
#[utoipa::path(
    method(put, patch),
    path = "/patients/{id}",
    tag = PATIENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Patient ID")),
    request_body = UpdatePatientDto,
    responses(
        (status = 200, description = "Updated patient", body = PatientDto),
        (status = 400, description = "Invalid patient data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this patient", body = ErrorDto),
        (status = 404, description = "Patient or new customer not found", body = ErrorDto),
        (status = 409, description = "Duplicate patient name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_patient(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdatePatientDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &claims);
    let user = guard.require(&[Permission::PatientOwner(id)]).await?;

    // Owners may send their own ID back unchanged
    if let Some(customer_id) = payload.customer_id {
        if user.customer_id() != Some(customer_id) {
            guard.authorize(&user, &[Permission::Admin]).await?;
        }
    }

    let params = UpdatePatientParams::from_dto(id, payload);
    let patient = PatientService::new(&state.db).update(params).await?;

    Ok(Json(patient.into_dto()))
}

/// Delete a patient and their appointments.
///
/// # Access Control
/// - `PatientOwner` - The owning customer or an admin
#[utoipa::path(
    delete,
    path = "/patients/{id}",
    tag = PATIENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to delete this patient", body = ErrorDto),
        (status = 404, description = "Patient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::PatientOwner(id)])
        .await?;

    let patient = PatientService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new(format!(
        "Patient {} deleted successfully",
        patient.name
    ))))
}
