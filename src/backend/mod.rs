//! Access to the service tools REST backend.
//!
//! Everything above this module talks to the backend through the [`Backend`]
//! trait; [`http::HttpBackend`] is the production implementation and
//! `mock::MockBackend` (feature `test-mocks`) isolates services in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::errors::BackendResult;

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Methods used to send a JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

/// File forwarded to a multipart endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Path and query pairs are relative to the configured backend base URL.
///
/// Every method fails with [`errors::BackendError::Status`] on a non-2xx
/// answer without interpreting the body. An empty 2xx body reads as
/// [`Value::Null`].
#[async_trait]
pub trait Backend: Send + Sync {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> BackendResult<Value>;

    async fn send_json(&self, method: WriteMethod, path: &str, body: &Value)
    -> BackendResult<Value>;

    async fn upload_file(&self, path: &str, field: &str, file: UploadedFile)
    -> BackendResult<Value>;

    /// POSTs without a body and returns the absolute redirect target, if any.
    async fn post_for_redirect(&self, path: &str) -> BackendResult<Option<String>>;
}
