use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        customer::{CustomerDto, UpdateCustomerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::customer::UpdateCustomerParams,
        service::customer::CustomerService,
        state::AppState,
        util::extract::{AppJson, AppPath},
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customer";

/// List all customers.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/customers",
    tag = CUSTOMER_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All customers", body = Vec<CustomerDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let customers = CustomerService::new(&state.db).get_all().await?;

    Ok(Json(
        customers
            .into_iter()
            .map(|c| c.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a customer.
///
/// # Access Control
/// - `CustomerOrAdmin` - The customer themself or an admin
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "The customer", body = CustomerDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this customer or an admin", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::CustomerOrAdmin(id)])
        .await?;

    let customer = CustomerService::new(&state.db).get_by_id(id).await?;

    Ok(Json(customer.into_dto()))
}

/// Update a customer.
///
/// Partial update; absent fields are left untouched and a new password is re-hashed.
///
/// # Access Control
/// - `CustomerOrAdmin` - The customer themself or an admin
///
/// # Returns
/// - `200 OK` - The updated customer
/// - `400 Bad Request` - A field failed validation
/// - `404 Not Found` - Customer not found
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    method(put, patch),
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateCustomerDto,
    responses(
        (status = 200, description = "Updated customer", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this customer or an admin", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_customer(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::CustomerOrAdmin(id)])
        .await?;

    let params = UpdateCustomerParams::from_dto(id, payload);
    let customer = CustomerService::new(&state.db).update(params).await?;

    Ok(Json(customer.into_dto()))
}

/// Delete a customer together with their patients and appointments.
///
/// # Access Control
/// - `CustomerOrAdmin` - The customer themself or an admin
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    tag = CUSTOMER_TAG,
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not this customer or an admin", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::CustomerOrAdmin(id)])
        .await?;

    CustomerService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto::new(format!(
        "Customer {} deleted successfully",
        id
    ))))
}
