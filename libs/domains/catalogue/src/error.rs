use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldErrors};
use thiserror::Error;

/// Fault raised by a `CatalogueItemStore` implementation.
///
/// Models storage-layer failures only; absence of a row is expressed through
/// `Option` returns, not through this type.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("catalogue item not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Convert CatalogueError to AppError for standardized error responses.
///
/// Store faults and internal errors are logged here, while the cause is
/// still known, and collapse into the opaque 500 response.
impl From<CatalogueError> for AppError {
    fn from(err: CatalogueError) -> Self {
        match err {
            CatalogueError::Validation(errors) => AppError::Validation(errors),
            CatalogueError::NotFound => AppError::NotFound,
            CatalogueError::Store(e) => {
                tracing::error!(error = %e, "catalogue store fault");
                AppError::Internal
            }
            CatalogueError::Internal(msg) => {
                tracing::error!(error = %msg, "catalogue internal error");
                AppError::Internal
            }
        }
    }
}

impl IntoResponse for CatalogueError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
