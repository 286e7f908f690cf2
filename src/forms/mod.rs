//! Form definitions backing the console routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod column_mappings;
pub mod excel_upload;
pub mod ingester;

#[derive(Debug, Error, PartialEq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("JSON path is required")]
    MissingJsonPath,

    #[error("Main column name is required")]
    MissingMainColumn,

    #[error("invalid column mapping id")]
    InvalidMappingId,

    #[error("Please select an .xls or .xlsx file")]
    InvalidSpreadsheet,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Please enter at least one number")]
    NoNumbers,

    #[error("Please enter an ID")]
    MissingId,
}
