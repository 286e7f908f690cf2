//! Services of the ingestion test harness.

use serde_json::Value;

use crate::backend::{Backend, WriteMethod};
use crate::domain::ingester::PublishRequest;
use crate::domain::types::NonEmptyString;
use crate::dto::panes::ResultPane;
use crate::forms::ingester::{GetByIdForm, PublishForm};
use crate::services::{ServiceError, ServiceResult};

/// Message shown when the lookup fails for any reason.
pub const FETCH_FAILED: &str = "Error fetching data";

/// Looks up one ingested record.
pub async fn get_by_id<B>(backend: &B, form: GetByIdForm) -> ServiceResult<ResultPane>
where
    B: Backend + ?Sized,
{
    let id = NonEmptyString::try_from(form)?;
    let query = [("id".to_string(), id.into_inner())];

    match backend.get_json("/ingester/getById", &query).await {
        Ok(body) => Ok(ResultPane::success(&body)),
        Err(err) => {
            log::error!("Failed to fetch ingested record: {err}");
            Ok(ResultPane::failure(FETCH_FAILED))
        }
    }
}

/// Publishes the numbers; nothing is sent unless every token parses.
pub async fn publish<B>(backend: &B, form: PublishForm) -> ServiceResult<ResultPane>
where
    B: Backend + ?Sized,
{
    let request = PublishRequest::try_from(form)?;
    let body = serde_json::to_value(&request).map_err(|err| ServiceError::Backend(err.into()))?;

    match backend
        .send_json(WriteMethod::Post, "/ingester/publish", &body)
        .await
    {
        Ok(Value::Null) => Ok(ResultPane::success(&Value::Object(Default::default()))),
        Ok(body) => Ok(ResultPane::success(&body)),
        Err(err) => {
            log::error!("Failed to publish numbers: {err}");
            let message = match err.status() {
                Some(status) => format!("Server error: {status}"),
                None => err.to_string(),
            };
            Ok(ResultPane::failure(message))
        }
    }
}
