//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Settings read from `config/*.yaml` and `APP_*` environment variables.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Signing key for the flash message cookie, at least 64 bytes.
    pub secret: String,
    /// Base URL of the backend REST API.
    pub backend_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
