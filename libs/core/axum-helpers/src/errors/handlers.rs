use axum::{http::StatusCode, response::Response};

use super::{ErrorCode, error_response};

/// Router fallback: JSON 404 for unknown routes.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        ErrorCode::NotFound,
        ErrorCode::NotFound.default_message().to_string(),
        None,
    )
}
