use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::dto::panes::ResultPane;
use crate::forms::excel_upload::UploadExcelForm;
use crate::routes::{base_context, render_template};
use crate::services::{ServiceError, excel_upload as excel_upload_service, user as user_service};

async fn render_upload_page(
    backend: &HttpBackend,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
    pane: &ResultPane,
) -> HttpResponse {
    let user = user_service::current_user(backend).await;
    let mut context = base_context(flash_messages, user.as_ref(), "excel_upload");
    context.insert("pane", pane);
    render_template(tera, "excel_upload/index.html", &context)
}

#[get("/excel-upload")]
pub async fn show_excel_upload(
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_upload_page(&backend, &flash_messages, &tera, &ResultPane::default()).await
}

#[post("/excel-upload")]
pub async fn upload_excel(
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    form: Result<MultipartForm<UploadExcelForm>, actix_web::Error>,
) -> impl Responder {
    let form = match form {
        Ok(MultipartForm(form)) => form,
        Err(err) => {
            // Oversized or malformed multipart bodies.
            log::warn!("Rejected spreadsheet upload: {err}");
            let pane = ResultPane::failure(format!("Upload failed: {err}"));
            return render_upload_page(&backend, &flash_messages, &tera, &pane).await;
        }
    };

    let pane = match excel_upload_service::upload_excel(backend.get_ref(), form).await {
        Ok(pane) => pane,
        Err(ServiceError::Form(message)) => ResultPane::failure(message),
        Err(err) => {
            log::error!("Failed to upload spreadsheet: {err}");
            ResultPane::failure(err.to_string())
        }
    };

    render_upload_page(&backend, &flash_messages, &tera, &pane).await
}
