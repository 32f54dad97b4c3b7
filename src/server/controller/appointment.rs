use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        appointment::{AppointmentDto, BookAppointmentDto, UpdateAppointmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::{
            appointment::{AppointmentDetails, CreateAppointmentParams, UpdateAppointmentParams},
            auth::AuthUser,
        },
        service::appointment::AppointmentService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping appointment endpoints in OpenAPI documentation
pub static APPOINTMENT_TAG: &str = "appointment";

fn into_dtos(appointments: Vec<AppointmentDetails>) -> Vec<AppointmentDto> {
    appointments.into_iter().map(|a| a.into_dto()).collect()
}

/// List every appointment in the clinic.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/appointments/admin",
    tag = APPOINTMENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All appointments", body = Vec<AppointmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_appointments(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let appointments = AppointmentService::new(&state.db).get_all().await?;

    Ok(Json(into_dtos(appointments)))
}

/// List the caller's appointments.
///
/// A veterinarian gets the appointments they attend, a customer those of their patients.
#[utoipa::path(
    get,
    path = "/appointments",
    tag = APPOINTMENT_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's appointments", body = Vec<AppointmentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointments(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).authenticate().await?;

    let service = AppointmentService::new(&state.db);
    let appointments = match user {
        AuthUser::Veterinarian(veterinarian) => {
            service.get_by_veterinarian(veterinarian.id).await?
        }
        AuthUser::Customer(customer) => service.get_by_customer(customer.id).await?,
    };

    Ok(Json(into_dtos(appointments)))
}

/// Get an appointment with patient and veterinarian details.
///
/// # Access Control
/// - `AppointmentAccess` - The appointment's veterinarian, the patient's owner or an admin
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = APPOINTMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "The appointment", body = AppointmentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a participant or an admin", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::AppointmentAccess(id)])
        .await?;

    let appointment = AppointmentService::new(&state.db).get_by_id(id).await?;

    Ok(Json(appointment.into_dto()))
}

/// Book an appointment.
///
/// Times must fall on a quarter hour. Neither the veterinarian nor the patient may
/// already have an appointment at that date and time.
///
/// # Access Control
/// - `PatientAccess` - Customers may only book for their own patients
///
/// # Returns
/// - `201 Created` - The booked appointment
/// - `400 Bad Request` - Invalid date or time
/// - `404 Not Found` - Veterinarian or patient not found
/// - `409 Conflict` - Slot already taken
#[utoipa::path(
    post,
    path = "/appointments/book",
    tag = APPOINTMENT_TAG,
    security(("bearer_auth" = [])),
    request_body = BookAppointmentDto,
    responses(
        (status = 201, description = "Appointment booked", body = AppointmentDto),
        (status = 400, description = "Invalid appointment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to book for this patient", body = ErrorDto),
        (status = 404, description = "Veterinarian or patient not found", body = ErrorDto),
        (status = 409, description = "Slot already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn book_appointment(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppJson(payload): AppJson<BookAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::PatientAccess(payload.patient_id)])
        .await?;

    let params = CreateAppointmentParams::from_dto(payload);
    let appointment = AppointmentService::new(&state.db).book(params).await?;

    Ok((StatusCode::CREATED, Json(appointment.into_dto())))
}

/// Update an appointment.
///
/// Partial update with the same validation and conflict checks as booking.
///
/// # Access Control
/// - `AppointmentAccess` - The appointment's veterinarian, the patient's owner or an admin
/// - `PatientAccess` - For the new patient when `patient_id` is present
#[utoipa::path(
    method(put, patch),
    path = "/appointments/{id}",
    tag = APPOINTMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    request_body = UpdateAppointmentDto,
    responses(
        (status = 200, description = "Updated appointment", body = AppointmentDto),
        (status = 400, description = "Invalid appointment data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this appointment", body = ErrorDto),
        (status = 404, description = "Appointment, veterinarian or patient not found", body = ErrorDto),
        (status = 409, description = "Slot already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateAppointmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let mut permissions = vec![Permission::AppointmentAccess(id)];
    if let Some(patient_id) = payload.patient_id {
        permissions.push(Permission::PatientAccess(patient_id));
    }

    AuthGuard::new(&state.db, &claims)
        .require(&permissions)
        .await?;

    let params = UpdateAppointmentParams::from_dto(id, payload);
    let appointment = AppointmentService::new(&state.db).update(params).await?;

    Ok(Json(appointment.into_dto()))
}

/// Delete an appointment.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = APPOINTMENT_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let appointment = AppointmentService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new(format!(
        "Appointment at {} on {} deleted successfully for patient {}",
        appointment.time.format("%H:%M"),
        appointment.date,
        appointment.patient_id
    ))))
}
