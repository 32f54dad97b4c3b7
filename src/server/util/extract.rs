use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body extractor whose rejections use the API's `ErrorDto` body and a
/// 400 status instead of axum's plain text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor; unparsable segments such as `/patients/abc` become a 400
/// with an `ErrorDto` body.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
