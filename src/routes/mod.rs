//! HTTP handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::user::CurrentUser;
use crate::listing::screens::SCREENS;

pub mod column_mappings;
pub mod excel_upload;
pub mod ingester;
pub mod lists;
pub mod main;

/// Maps a flash message level to a Bootstrap alert class.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Context shared by every page: alerts, the header user and navigation.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    current_user: Option<&CurrentUser>,
    current_page: &str,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();
    let navigation = SCREENS
        .iter()
        .map(|screen| (screen.key, screen.title))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &current_user);
    context.insert("current_page", current_page);
    context.insert("navigation", &navigation);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, location))
        .finish()
}
