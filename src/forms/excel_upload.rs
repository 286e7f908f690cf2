use actix_multipart::form::{MultipartForm, tempfile::TempFile};

use crate::backend::UploadedFile;
use crate::forms::FormError;

/// Extensions accepted by the backend spreadsheet parser.
pub const SPREADSHEET_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

#[derive(MultipartForm)]
pub struct UploadExcelForm {
    #[multipart(limit = "10MB")]
    pub file: Option<TempFile>,
}

/// True when `file_name` ends in `.xls` or `.xlsx`, in any case.
pub fn is_spreadsheet(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| {
            !stem.is_empty()
                && SPREADSHEET_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

impl UploadExcelForm {
    /// Reads the uploaded spreadsheet into memory.
    pub fn into_upload(self) -> Result<UploadedFile, FormError> {
        let file = self.file.ok_or(FormError::InvalidSpreadsheet)?;
        let file_name = file
            .file_name
            .clone()
            .filter(|name| is_spreadsheet(name))
            .ok_or(FormError::InvalidSpreadsheet)?;
        let content_type = file.content_type.as_ref().map(ToString::to_string);

        let bytes = std::fs::read(file.file.path()).map_err(|err| {
            log::error!("Failed to read uploaded file {file_name}: {err}");
            FormError::InvalidSpreadsheet
        })?;

        Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        })
    }
}
