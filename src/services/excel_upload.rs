use crate::backend::Backend;
use crate::backend::errors::BackendError;
use crate::dto::panes::ResultPane;
use crate::forms::excel_upload::UploadExcelForm;
use crate::services::ServiceResult;

const UPLOAD_PATH: &str = "/excel/upload";

/// Forwards the spreadsheet and renders the parsed JSON.
///
/// Backend failures are shown in the error pane rather than returned.
pub async fn upload_excel<B>(backend: &B, form: UploadExcelForm) -> ServiceResult<ResultPane>
where
    B: Backend + ?Sized,
{
    let file = form.into_upload()?;
    let file_name = file.file_name.clone();

    match backend.upload_file(UPLOAD_PATH, "file", file).await {
        Ok(body) => {
            log::info!("Uploaded {file_name}");
            Ok(ResultPane::success(&body))
        }
        Err(err) => {
            log::error!("Failed to upload {file_name}: {err}");
            Ok(ResultPane::failure(upload_failure(&err)))
        }
    }
}

fn upload_failure(err: &BackendError) -> String {
    match err.status() {
        Some(status) => format!("Upload failed: {status}"),
        None => format!("Upload failed: {err}"),
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use crate::services::ServiceError;

    #[tokio::test]
    async fn missing_file_skips_the_backend() {
        let mut backend = MockBackend::new();
        backend.expect_upload_file().times(0);

        let result = upload_excel(&backend, UploadExcelForm { file: None }).await;

        assert!(matches!(
            result,
            Err(ServiceError::Form(message)) if message == "Please select an .xls or .xlsx file"
        ));
    }
}
