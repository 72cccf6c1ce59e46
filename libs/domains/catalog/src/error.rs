use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

/// Broad classification of a [`CatalogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    OutOfRange,
    StoreError,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid input: {0}")]
    InvalidArgument(String),

    #[error("Product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("Review not found: {0}")]
    ReviewNotFound(Uuid),

    /// A page beyond the first that holds no items.
    #[error("Page {0} does not exist")]
    PageOutOfRange(u64),

    #[error("Store error: {0}")]
    Store(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            CatalogError::ProductNotFound(_) | CatalogError::ReviewNotFound(_) => {
                ErrorKind::NotFound
            }
            CatalogError::PageOutOfRange(_) => ErrorKind::OutOfRange,
            CatalogError::Store(_) => ErrorKind::StoreError,
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidArgument(msg) => AppError::BadRequest(msg),
            CatalogError::ProductNotFound(_) => AppError::NotFound("Product not found".into()),
            CatalogError::ReviewNotFound(_) => AppError::NotFound("Review not found".into()),
            CatalogError::PageOutOfRange(_) => AppError::NotFound("Page does not exist".into()),
            CatalogError::Store(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Store(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(err: validator::ValidationErrors) -> Self {
        CatalogError::InvalidArgument(err.to_string())
    }
}
