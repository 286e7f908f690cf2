#[cfg(feature = "data")]
pub mod backend;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod listing;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod viewer;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::backend::http::HttpBackend;
    use crate::models::config::ServerConfig;
    use crate::routes::column_mappings::{
        edit_column_mapping, save_column_mapping, show_column_mappings,
    };
    use crate::routes::excel_upload::{show_excel_upload, upload_excel};
    use crate::routes::ingester::{get_by_id, publish, show_ingester};
    use crate::routes::lists::{show_job_instances, show_job_log_entries, show_log_notifications};
    use crate::routes::main::{logout, show_index};

    /// Registers every console route on an app.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.service(show_index)
            .service(show_log_notifications)
            .service(show_job_instances)
            .service(show_job_log_entries)
            .service(show_column_mappings)
            .service(edit_column_mapping)
            .service(save_column_mapping)
            .service(show_excel_upload)
            .service(upload_excel)
            .service(show_ingester)
            .service(get_by_id)
            .service(publish)
            .service(logout);
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let backend = HttpBackend::new(&server_config.backend_url, server_config.request_timeout())
            .map_err(|e| std::io::Error::other(format!("Failed to build backend client: {e}")))?;
        let backend = web::Data::new(backend);
        log::info!("Using backend at {}", backend.base_url());

        // Keys and stores for flash messages.
        let secret_key = Key::try_from(server_config.secret.as_bytes())
            .map_err(|e| std::io::Error::other(format!("Invalid secret: {e}")))?;

        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", "./assets"))
                .configure(configure)
                .app_data(web::Data::new(tera.clone()))
                .app_data(backend.clone())
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
