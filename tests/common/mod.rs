#![allow(dead_code)]

use std::time::Duration;

use actix_web::cookie::Key;
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use service_tools_console::backend::http::{DEFAULT_TIMEOUT, HttpBackend};
use tera::Tera;
use wiremock::MockServer;

/// Backend client pointed at `server` under the usual `/api` prefix.
pub fn backend(server: &MockServer) -> HttpBackend {
    backend_with_timeout(server, DEFAULT_TIMEOUT)
}

pub fn backend_with_timeout(server: &MockServer, timeout: Duration) -> HttpBackend {
    HttpBackend::new(&format!("{}/api", server.uri()), timeout).expect("valid base url")
}

pub fn tera() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*")).expect("templates parse")
}

pub fn flash_messages() -> FlashMessagesFramework {
    let store = CookieMessageStore::builder(Key::generate()).build();
    FlashMessagesFramework::builder(store).build()
}
