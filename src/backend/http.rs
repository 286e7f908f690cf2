//! `reqwest` implementation of [`Backend`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url, redirect};
use serde_json::Value;

use crate::backend::errors::{BackendError, BackendResult};
use crate::backend::{Backend, UploadedFile, WriteMethod};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to the backend base URL, e.g.
/// `http://localhost:8080/service-tool/api`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Builds a client whose every request is bounded by `timeout`.
    ///
    /// Redirects are never followed: the backend signals logout with a 302
    /// that the browser, not the console, has to follow.
    pub fn new(base_url: &str, timeout: Duration) -> BackendResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(&format!("{trimmed}/"))
            .map_err(|e| BackendError::Config(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| BackendError::Config(format!("{path}: {e}")))
    }
}

/// Fails on a non-2xx status, otherwise parses the (possibly empty) body.
async fn read_json(response: Response) -> BackendResult<Value> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Status(status.as_u16()));
    }

    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get_json(&self, path: &str, query: &[(String, String)]) -> BackendResult<Value> {
        let url = self.url(path)?;
        let start = Instant::now();

        let result = match self.client.get(url).query(query).send().await {
            Ok(response) => read_json(response).await,
            Err(err) => Err(err.into()),
        };

        match &result {
            Ok(_) => log::debug!("GET {path} ok in {:?}", start.elapsed()),
            Err(err) => log::debug!("GET {path} failed in {:?}: {err}", start.elapsed()),
        }
        result
    }

    async fn send_json(
        &self,
        method: WriteMethod,
        path: &str,
        body: &Value,
    ) -> BackendResult<Value> {
        let url = self.url(path)?;
        let request = match method {
            WriteMethod::Post => self.client.post(url),
            WriteMethod::Put => self.client.put(url),
        };

        let response = request.json(body).send().await?;
        read_json(response).await.inspect_err(|err| {
            log::warn!("{method:?} {path} failed: {err}");
        })
    }

    async fn upload_file(
        &self,
        path: &str,
        field: &str,
        file: UploadedFile,
    ) -> BackendResult<Value> {
        let url = self.url(path)?;
        let size = file.bytes.len();

        let mut part = Part::bytes(file.bytes).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new().part(field.to_string(), part);

        log::info!("Uploading {} ({size} bytes) to {path}", file.file_name);
        let response = self.client.post(url).multipart(form).send().await?;
        read_json(response).await
    }

    async fn post_for_redirect(&self, path: &str) -> BackendResult<Option<String>> {
        let url = self.url(path)?;
        let response = self.client.post(url.clone()).send().await?;
        let status = response.status();

        if status.is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| url.join(value).ok())
                .map(String::from);
            return Ok(location);
        }

        if status.is_success() {
            Ok(None)
        } else {
            Err(BackendError::Status(status.as_u16()))
        }
    }
}
