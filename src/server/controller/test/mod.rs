//! Router level tests driving full requests through extraction, access control and
//! error mapping.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::{
    model::auth::Role,
    server::{router::router, state::AppState, util::jwt::TokenService},
};


fn token_service() -> TokenService {
    TokenService::new("test-secret", chrono::Duration::hours(1))
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone(), token_service()))
}

fn token_for(role: Role, id: i32) -> String {
    let (token, _) = token_service().issue(role, id).unwrap();
    token
}

/// Sends a request and returns the status with the parsed JSON body (`Null` when empty).
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// Tests that the generated OpenAPI document is served with the bearer scheme.
///
/// Expected: 200 with every route group and `bearer_auth` registered
#[tokio::test]
async fn serves_openapi_document() {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::GET, "/api/docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    for path in [
        "/auth/customers/register",
        "/customers/{id}",
        "/veterinarians/register",
        "/patients/{id}",
        "/appointments/book",
    ] {
        assert!(body["paths"].get(path).is_some(), "missing path {}", path);
    }
    assert!(body["components"]["securitySchemes"]
        .get("bearer_auth")
        .is_some());
}

/// Tests a path id that doesn't parse or overflows `i32`.
///
/// Expected: 400 with an `error` body for both
#[tokio::test]
async fn unparsable_path_id_is_bad_request() {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    for uri in ["/patients/abc", "/veterinarians/99999999999"] {
        let (status, body) = send(&app, Method::GET, uri, None, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body["error"].is_string(), "{}", uri);
    }
}

/// Tests a route that doesn't exist.
///
/// Expected: 404 "Not found"
#[tokio::test]
async fn unknown_route_is_not_found() {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::GET, "/nope", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

/// Tests a known route with an unsupported method.
///
/// Expected: 405 "Method not allowed"
#[tokio::test]
async fn wrong_method_is_method_not_allowed() {
    let test = TestBuilder::new().with_clinic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(&app(db), Method::DELETE, "/veterinarians", None, None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}
