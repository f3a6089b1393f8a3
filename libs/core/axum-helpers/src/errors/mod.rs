pub mod handlers;
pub mod messages;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Accumulating per-field validation message collector.
///
/// Handlers record every violation they find and flush the collector once
/// at the end of validation, so clients see all failures in one response
/// instead of one at a time. Serializes as a plain JSON object mapping each
/// field name to its ordered list of messages:
///
/// ```json
/// { "name": ["the catalogue item name must not be empty"] }
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation message against a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, in insertion order.
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Application error taxonomy, mapped onto HTTP responses.
///
/// Three kinds cover the whole surface:
/// - `Validation` — client input broke a business rule; 400 with the
///   field-to-messages object as body.
/// - `NotFound` — a referenced identifier does not exist; 404, empty body.
/// - `Internal` — any unexpected server-side fault; 500 with a fixed
///   generic message. The underlying cause must be logged where it is
///   still known and is never sent to the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Not Found")]
    NotFound,

    #[error("Internal Server Error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::info!("Request validation failed: {:?}", errors);
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Internal => {
                (StatusCode::INTERNAL_SERVER_ERROR, messages::GENERIC_FAILURE).into_response()
            }
        }
    }
}
