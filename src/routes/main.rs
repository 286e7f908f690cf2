use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::http::HttpBackend;
use crate::routes::{base_context, redirect, render_template};
use crate::services::user as user_service;

#[get("/")]
pub async fn show_index(
    backend: web::Data<HttpBackend>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let user = user_service::current_user(backend.get_ref()).await;
    let context = base_context(&flash_messages, user.as_ref(), "index");

    render_template(&tera, "main/index.html", &context)
}

#[post("/logout")]
pub async fn logout(backend: web::Data<HttpBackend>) -> impl Responder {
    match user_service::logout(backend.get_ref()).await {
        Ok(location) => redirect(&location),
        Err(err) => {
            log::error!("Failed to log out: {err}");
            FlashMessage::error(format!("Logout failed: {err}")).send();
            redirect("/")
        }
    }
}
