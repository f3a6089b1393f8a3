use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Fallback handler for requests that match no route.
///
/// Responds 404 with an empty body, consistent with the resource-level
/// not-found behavior.
pub async fn not_found() -> Response {
    StatusCode::NOT_FOUND.into_response()
}
