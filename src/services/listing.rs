//! Loading of the list screens.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::backend::Backend;
use crate::dto::listing::ListQuery;
use crate::listing::{ListView, ListViewController, ScreenConfig};
use crate::services::ServiceResult;

/// Restores `screen` from the request query and runs one search.
///
/// Query names the screen does not declare are ignored. Backend failures end
/// up in the view's result state; only invalid filter values are returned as
/// errors.
pub async fn load_screen<R, B>(
    backend: Arc<B>,
    screen: &'static ScreenConfig,
    query: &ListQuery,
) -> ServiceResult<ListView<R>>
where
    R: DeserializeOwned + Clone,
    B: Backend + ?Sized,
{
    let controller = ListViewController::<R, B>::new(screen, backend);
    let filters = query
        .filter_pairs()
        .filter(|(name, _)| screen.field(name).is_some());
    controller.restore(filters, query.page, query.size)?;
    controller.search().await;
    Ok(controller.snapshot())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::backend::errors::BackendError;
    use crate::backend::mock::MockBackend;
    use crate::domain::job_instance::JobInstance;
    use crate::listing::screens::{JOB_INSTANCES, LOG_NOTIFICATIONS};
    use crate::services::ServiceError;

    #[tokio::test]
    async fn loads_the_requested_page() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_json()
            .withf(|path, query| {
                path == "/job-instances/search/paginated"
                    && query.contains(&("status".to_string(), "FAILED".to_string()))
                    && query.contains(&("page".to_string(), "2".to_string()))
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "content": [{"id": 5, "name": "Sync", "status": "FAILED"}],
                    "totalPages": 3,
                    "totalElements": 21,
                }))
            });

        let query = ListQuery::parse("status=failed&page=2");
        let view: ListView<JobInstance> = load_screen(Arc::new(backend), &JOB_INSTANCES, &query)
            .await
            .unwrap();

        assert_eq!(view.result.rows[0].id, 5);
        assert_eq!(view.result.total_elements, 21);
        assert!(view.pager.has_prev);
        assert!(!view.pager.has_next);
    }

    #[tokio::test]
    async fn backend_errors_stay_in_the_view() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_json()
            .times(1)
            .returning(|_, _| Err(BackendError::Status(500)));

        let view: ListView<Value> =
            load_screen(Arc::new(backend), &LOG_NOTIFICATIONS, &ListQuery::default())
                .await
                .unwrap();

        assert_eq!(view.result.error.as_deref(), Some("Request failed: 500"));
        assert!(view.result.rows.is_empty());
    }

    #[tokio::test]
    async fn undeclared_query_names_are_ignored() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_json()
            .withf(|path, query| {
                path == "/job-instances/search/paginated"
                    && query.contains(&("name".to_string(), "Sync".to_string()))
                    && !query.iter().any(|(name, _)| name == "utm_source")
            })
            .times(1)
            .returning(|_, _| Ok(json!({"content": [], "totalPages": 0, "totalElements": 0})));

        let query = ListQuery::parse("name=Sync&utm_source=mail");
        let view: ListView<Value> = load_screen(Arc::new(backend), &JOB_INSTANCES, &query)
            .await
            .unwrap();

        assert_eq!(view.filters.get("name"), Some("Sync"));
        assert_eq!(view.result.error, None);
    }

    #[tokio::test]
    async fn invalid_filters_skip_the_backend() {
        let mut backend = MockBackend::new();
        backend.expect_get_json().times(0);

        let query = ListQuery::parse("status=DONE");
        let result: ServiceResult<ListView<Value>> =
            load_screen(Arc::new(backend), &JOB_INSTANCES, &query).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
