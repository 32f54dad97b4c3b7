use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, TokenDto},
        customer::{CustomerDto, RegisterCustomerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::customer::CreateCustomerParams,
        service::auth::AuthService,
        state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a customer account.
///
/// Public endpoint. Validates email format, password complexity and a 9 digit contact
/// number before storing the customer with a hashed password.
///
/// # Returns
/// - `201 Created` - The registered customer
/// - `400 Bad Request` - A field failed validation
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/auth/customers/register",
    tag = AUTH_TAG,
    request_body = RegisterCustomerDto,
    responses(
        (status = 201, description = "Customer registered", body = CustomerDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateCustomerParams::from_dto(payload);

    let customer = AuthService::new(&state.db, &state.tokens)
        .register_customer(params)
        .await?;

    Ok((StatusCode::CREATED, Json(customer.into_dto())))
}

/// Log in as a customer.
///
/// # Returns
/// - `200 OK` - Bearer token with `customer` role
/// - `401 Unauthorized` - Invalid email or password
#[utoipa::path(
    post,
    path = "/auth/customers/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_customer(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.tokens)
        .login_customer(&payload.email, &payload.password)
        .await?;

    Ok(Json(issued.into_dto()))
}

/// Log in as a veterinarian.
///
/// # Returns
/// - `200 OK` - Bearer token with `veterinarian` role
/// - `401 Unauthorized` - Invalid email or password
#[utoipa::path(
    post,
    path = "/auth/veterinarians/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_veterinarian(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let issued = AuthService::new(&state.db, &state.tokens)
        .login_veterinarian(&payload.email, &payload.password)
        .await?;

    Ok(Json(issued.into_dto()))
}

/// Revoke the bearer token used for this request.
///
/// The token's `jti` is added to the blocklist; any later request with it fails with 401.
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - Missing, invalid or already revoked token
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = AUTH_TAG,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(claims): BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).authenticate().await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(&claims)
        .await?;

    tracing::debug!("{:?} {} logged out", user.role(), user.id());

    Ok(Json(MessageDto::new("Successfully logged out")))
}
