//! List screens: log notifications, job instances and job log entries.

use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tera::{Context, Tera};

use crate::backend::http::HttpBackend;
use crate::domain::job_instance::JobInstance;
use crate::domain::job_log_entry::JobLogEntry;
use crate::domain::log_notification::LogNotification;
use crate::dto::listing::{ListPageData, ListQuery};
use crate::dto::rows::{JobInstanceRow, JobLogEntryRow, LogNotificationRow};
use crate::listing::ScreenConfig;
use crate::listing::screens::{JOB_INSTANCES, JOB_LOG_ENTRIES, LOG_NOTIFICATIONS};
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, listing as listing_service, user as user_service};

/// Loads `screen` for the request and builds its base template context.
///
/// On invalid filters the user is sent back to the unfiltered screen.
pub(crate) async fn list_context<R, T>(
    req: &HttpRequest,
    backend: &web::Data<HttpBackend>,
    flash_messages: &IncomingFlashMessages,
    screen: &'static ScreenConfig,
    row: impl FnMut(R) -> T,
) -> Result<Context, HttpResponse>
where
    R: DeserializeOwned + Clone,
    T: Serialize,
{
    let query = ListQuery::parse(req.query_string());
    let view = match listing_service::load_screen::<R, _>(
        backend.clone().into_inner(),
        screen,
        &query,
    )
    .await
    {
        Ok(view) => view,
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            return Err(redirect(&format!("/{}", screen.key)));
        }
        Err(err) => {
            log::error!("Failed to load {}: {err}", screen.key);
            return Err(HttpResponse::InternalServerError().finish());
        }
    };

    let user = user_service::current_user(backend.get_ref()).await;
    let mut context = base_context(flash_messages, user.as_ref(), screen.key);
    context.insert("list", &ListPageData::new(screen, view, row));
    Ok(context)
}

#[get("/log-notifications")]
pub async fn show_log_notifications(
    req: HttpRequest,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut index = 0;
    let row = move |notification: LogNotification| {
        index += 1;
        LogNotificationRow::new(index, notification)
    };

    match list_context(&req, &backend, &flash_messages, &LOG_NOTIFICATIONS, row).await {
        Ok(context) => render_template(&tera, "log_notifications/index.html", &context),
        Err(response) => response,
    }
}

#[get("/job-instances")]
pub async fn show_job_instances(
    req: HttpRequest,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_context::<JobInstance, _>(
        &req,
        &backend,
        &flash_messages,
        &JOB_INSTANCES,
        JobInstanceRow::from,
    )
    .await
    {
        Ok(context) => render_template(&tera, "job_instances/index.html", &context),
        Err(response) => response,
    }
}

#[get("/job-log-entries")]
pub async fn show_job_log_entries(
    req: HttpRequest,
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_context::<JobLogEntry, _>(
        &req,
        &backend,
        &flash_messages,
        &JOB_LOG_ENTRIES,
        JobLogEntryRow::from,
    )
    .await
    {
        Ok(context) => render_template(&tera, "job_log_entries/index.html", &context),
        Err(response) => response,
    }
}
