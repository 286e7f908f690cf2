//! Routes of the ingestion test harness.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::dto::panes::{IngesterPageData, ResultPane};
use crate::forms::ingester::{GetByIdForm, PublishForm};
use crate::routes::{base_context, render_template};
use crate::services::{ServiceResult, ingester as ingester_service, user as user_service};

async fn render_ingester_page(
    backend: &HttpBackend,
    flash_messages: &IncomingFlashMessages,
    tera: &Tera,
    data: &IngesterPageData,
) -> HttpResponse {
    let user = user_service::current_user(backend).await;
    let mut context = base_context(flash_messages, user.as_ref(), "ingester");
    context.insert("ingester", data);
    render_template(tera, "ingester/index.html", &context)
}

/// Validation and backend errors both land in the pane.
fn into_pane(result: ServiceResult<ResultPane>) -> ResultPane {
    result.unwrap_or_else(|err| ResultPane::failure(err.to_string()))
}

#[get("/ingester")]
pub async fn show_ingester(
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_ingester_page(&backend, &flash_messages, &tera, &IngesterPageData::default()).await
}

#[post("/ingester/get-by-id")]
pub async fn get_by_id(
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<GetByIdForm>,
) -> impl Responder {
    let id = form.id.clone();
    let pane = into_pane(ingester_service::get_by_id(backend.get_ref(), form).await);

    let data = IngesterPageData {
        get_by_id: pane,
        id,
        ..IngesterPageData::default()
    };
    render_ingester_page(&backend, &flash_messages, &tera, &data).await
}

#[post("/ingester/publish")]
pub async fn publish(
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<PublishForm>,
) -> impl Responder {
    let numbers = form.numbers.clone();
    let pane = into_pane(ingester_service::publish(backend.get_ref(), form).await);

    let data = IngesterPageData {
        publish: pane,
        numbers,
        ..IngesterPageData::default()
    };
    render_ingester_page(&backend, &flash_messages, &tera, &data).await
}
