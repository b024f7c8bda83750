use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Router fallback: 404 in the envelope shape.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(messages::NOT_FOUND_RESOURCE)),
    )
        .into_response()
}

/// Method fallback: 405 in the envelope shape.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(messages::METHOD_NOT_ALLOWED)),
    )
        .into_response()
}
