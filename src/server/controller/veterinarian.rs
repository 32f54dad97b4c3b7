use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        veterinarian::{CreateVeterinarianDto, UpdateVeterinarianDto, VeterinarianDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::veterinarian::{CreateVeterinarianParams, UpdateVeterinarianParams},
        service::veterinarian::VeterinarianService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping veterinarian endpoints in OpenAPI documentation
pub static VETERINARIAN_TAG: &str = "veterinarian";

/// List all veterinarians.
///
/// Public endpoint so customers can pick a veterinarian before booking.
#[utoipa::path(
    get,
    path = "/veterinarians",
    tag = VETERINARIAN_TAG,
    responses(
        (status = 200, description = "All veterinarians", body = Vec<VeterinarianDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_veterinarians(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let veterinarians = VeterinarianService::new(&state.db).get_all().await?;

    Ok(Json(
        veterinarians
            .into_iter()
            .map(|v| v.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a veterinarian. Public endpoint.
#[utoipa::path(
    get,
    path = "/veterinarians/{id}",
    tag = VETERINARIAN_TAG,
    params(("id" = i32, Path, description = "Veterinarian ID")),
    responses(
        (status = 200, description = "The veterinarian", body = VeterinarianDto),
        (status = 404, description = "Veterinarian not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_veterinarian(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let veterinarian = VeterinarianService::new(&state.db).get_by_id(id).await?;

    Ok(Json(veterinarian.into_dto()))
}

/// Register a veterinarian.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The registered veterinarian
/// - `400 Bad Request` - A field failed validation, e.g. an email outside `@vet.com`
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/veterinarians/register",
    tag = VETERINARIAN_TAG,
    security(("bearer_auth" = [])),
    request_body = CreateVeterinarianDto,
    responses(
        (status = 201, description = "Veterinarian registered", body = VeterinarianDto),
        (status = 400, description = "Invalid veterinarian data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_veterinarian(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppJson(payload): AppJson<CreateVeterinarianDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateVeterinarianParams::from_dto(payload);
    let veterinarian = VeterinarianService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(veterinarian.into_dto())))
}

/// Update a veterinarian.
///
/// Partial update. A present but empty `description` or `languages` clears the column.
///
/// # Access Control
/// - `VeterinarianOrAdmin` - The veterinarian themself or an admin
/// - `Admin` - Additionally required when `is_admin` is present
#[utoipa::path(
    method(put, patch),
    path = "/veterinarians/{id}",
    tag = VETERINARIAN_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Veterinarian ID")),
    request_body = UpdateVeterinarianDto,
    responses(
        (status = 200, description = "Updated veterinarian", body = VeterinarianDto),
        (status = 400, description = "Invalid veterinarian data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to update this veterinarian", body = ErrorDto),
        (status = 404, description = "Veterinarian not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_veterinarian(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateVeterinarianDto>,
) -> Result<impl IntoResponse, AppError> {
    let mut permissions = vec![Permission::VeterinarianOrAdmin(id)];
    if payload.is_admin.is_some() {
        permissions.push(Permission::Admin);
    }

    AuthGuard::new(&state.db, &claims)
        .require(&permissions)
        .await?;

    let params = UpdateVeterinarianParams::from_dto(id, payload);
    let veterinarian = VeterinarianService::new(&state.db).update(params).await?;

    Ok(Json(veterinarian.into_dto()))
}

/// Delete a veterinarian and their appointments.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/veterinarians/{id}",
    tag = VETERINARIAN_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Veterinarian ID")),
    responses(
        (status = 200, description = "Veterinarian deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Veterinarian not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_veterinarian(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let veterinarian = VeterinarianService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new(format!(
        "Veterinarian {} deleted successfully",
        veterinarian.full_name()
    ))))
}
