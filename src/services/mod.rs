//! Services coordinating the backend calls behind each console page.

use thiserror::Error;

use crate::backend::errors::BackendError;
use crate::forms::FormError;
use crate::listing::filters::FilterError;

pub mod column_mappings;
pub mod excel_upload;
pub mod ingester;
pub mod listing;
pub mod user;

#[derive(Debug, Error)]
/// Errors surfaced by the service layer.
pub enum ServiceError {
    /// Invalid user input, reported before any backend call.
    #[error("{0}")]
    Form(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}

impl From<FilterError> for ServiceError {
    fn from(err: FilterError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
