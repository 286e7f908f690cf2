//! Routes for listing and editing column mappings.

use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::domain::column_mapping::ColumnMapping;
use crate::dto::column_mappings::ColumnMappingFormData;
use crate::dto::rows::ColumnMappingRow;
use crate::forms::column_mappings::SaveColumnMappingForm;
use crate::listing::screens::COLUMN_MAPPINGS;
use crate::routes::lists::list_context;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, column_mappings as column_mappings_service, user as user_service};

#[get("/column-mappings")]
/// Column mapping list with an empty create form.
pub async fn show_column_mappings(
    req: HttpRequest,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_context::<ColumnMapping, _>(
        &req,
        &backend,
        &flash_messages,
        &COLUMN_MAPPINGS,
        ColumnMappingRow::from,
    )
    .await
    {
        Ok(mut context) => {
            context.insert("mapping", &ColumnMappingFormData::default());
            render_template(&tera, "column_mappings/index.html", &context)
        }
        Err(response) => response,
    }
}

#[get("/column-mappings/{id}/edit")]
/// Edit form pre-filled from the backend.
pub async fn edit_column_mapping(
    id: web::Path<i64>,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = id.into_inner();

    match column_mappings_service::load_column_mapping(backend.get_ref(), id).await {
        Ok(mapping) => {
            let user = user_service::current_user(backend.get_ref()).await;
            let mut context = base_context(&flash_messages, user.as_ref(), COLUMN_MAPPINGS.key);
            context.insert("mapping", &mapping);
            render_template(&tera, "column_mappings/edit.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error(format!("Column mapping {id} not found")).send();
            redirect("/column-mappings")
        }
        Err(err) => {
            log::error!("Failed to load column mapping {id}: {err}");
            FlashMessage::error(format!("Failed to load column mapping: {err}")).send();
            redirect("/column-mappings")
        }
    }
}

#[post("/column-mappings/save")]
/// Create or update, then back to the refreshed list.
pub async fn save_column_mapping(
    backend: web::Data<HttpBackend>,
    web::Form(form): web::Form<SaveColumnMappingForm>,
) -> impl Responder {
    match column_mappings_service::save_column_mapping(backend.get_ref(), form).await {
        Ok(outcome) => {
            FlashMessage::success(outcome.message()).send();
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
        }
        Err(ServiceError::Backend(err)) => {
            let message = match err.status() {
                Some(status) => format!("Save failed: {status}"),
                None => format!("Save failed: {err}"),
            };
            FlashMessage::error(message).send();
        }
        Err(err) => {
            log::error!("Failed to save column mapping: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }
    redirect("/column-mappings")
}
