//! Mock backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::backend::errors::BackendResult;
use crate::backend::{Backend, UploadedFile, WriteMethod};

mock! {
    pub Backend {}

    #[async_trait]
    impl Backend for Backend {
        async fn get_json(&self, path: &str, query: &[(String, String)]) -> BackendResult<Value>;
        async fn send_json(
            &self,
            method: WriteMethod,
            path: &str,
            body: &Value,
        ) -> BackendResult<Value>;
        async fn upload_file(
            &self,
            path: &str,
            field: &str,
            file: UploadedFile,
        ) -> BackendResult<Value>;
        async fn post_for_redirect(&self, path: &str) -> BackendResult<Option<String>>;
    }
}
