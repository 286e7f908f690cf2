use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use service_tools_console::domain::column_mapping::ColumnMapping;
use service_tools_console::domain::job_instance::JobInstance;
use service_tools_console::domain::log_notification::LogNotification;
use service_tools_console::domain::types::PageSize;
use service_tools_console::listing::ListViewController;
use service_tools_console::listing::screens::{
    COLUMN_MAPPINGS, JOB_INSTANCES, LOG_NOTIFICATIONS,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

fn page(content: serde_json::Value, total_pages: u64, total_elements: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "content": content,
        "totalPages": total_pages,
        "totalElements": total_elements,
    }))
}

#[tokio::test]
async fn direct_lookup_miss_is_empty_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/job-instances/42"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/job-instances/search/paginated"))
        .respond_with(page(json!([]), 0, 0))
        .expect(0)
        .mount(&server)
        .await;

    let controller: ListViewController<JobInstance, _> =
        ListViewController::new(&JOB_INSTANCES, Arc::new(common::backend(&server)));
    controller.set_filter("id", "42").unwrap();
    controller.submit().await;

    let result = controller.result();
    assert!(result.rows.is_empty());
    assert_eq!((result.total_pages, result.total_elements), (0, 0));
    assert_eq!(result.error, None);
}

#[tokio::test]
async fn combined_search_sends_every_set_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/job-instances/search/paginated"))
        .and(query_param("name", "Sync"))
        .and(query_param("status", "FAILED"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .and(query_param("sortBy", "created"))
        .and(query_param("sortDirection", "desc"))
        .and(query_param_is_missing("id"))
        .respond_with(page(
            json!([{"id": 7, "name": "Sync", "status": "FAILED", "created": "2025-10-04T19:52:00"}]),
            1,
            1,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let controller: ListViewController<JobInstance, _> =
        ListViewController::new(&JOB_INSTANCES, Arc::new(common::backend(&server)));
    controller.set_filter("name", "Sync").unwrap();
    controller.set_filter("status", "FAILED").unwrap();
    controller.set_filter("id", "   ").unwrap();
    controller.submit().await;

    let result = controller.result();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].status.as_deref(), Some("FAILED"));
}

#[tokio::test]
async fn column_mappings_search_by_json_path_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/column-mappings/search/json-path"))
        .and(query_param("q", "$.a"))
        .and(query_param("sortBy", "id"))
        .and(query_param_is_missing("mainColumn"))
        .respond_with(page(
            json!([{"id": 1, "jsonPath": "$.a", "mainColumnName": "X"}]),
            1,
            1,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let controller: ListViewController<ColumnMapping, _> =
        ListViewController::new(&COLUMN_MAPPINGS, Arc::new(common::backend(&server)));
    controller.set_filter("jsonPath", "$.a").unwrap();
    controller.set_filter("mainColumn", "X").unwrap();
    controller.submit().await;

    assert_eq!(controller.result().rows[0].main_column_name.as_deref(), Some("X"));
}

#[tokio::test]
async fn server_error_is_reported_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/log-notifications/paginated"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller: ListViewController<LogNotification, _> =
        ListViewController::new(&LOG_NOTIFICATIONS, Arc::new(common::backend(&server)));
    controller.submit().await;

    let result = controller.result();
    assert!(result.error.as_deref().unwrap().contains("500"));
    assert!(result.rows.is_empty());
    assert!(!result.loading);
}

#[tokio::test]
async fn page_size_change_keeps_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/log-notifications/paginated"))
        .and(query_param("page", "3"))
        .and(query_param("size", "20"))
        .respond_with(page(json!([]), 2, 40))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/log-notifications/paginated"))
        .and(query_param("size", "10"))
        .respond_with(page(json!([{"id": 1}]), 10, 95))
        .mount(&server)
        .await;

    let controller: ListViewController<LogNotification, _> =
        ListViewController::new(&LOG_NOTIFICATIONS, Arc::new(common::backend(&server)));
    controller.set_page(3).await;
    controller.set_size(PageSize::new(20).unwrap()).await;

    let view = controller.snapshot();
    assert_eq!(view.page, 3);
    assert!(view.result.rows.is_empty());
    assert_eq!(view.result.error, None);
    assert!(view.pager.has_prev);
    assert!(!view.pager.has_next);
}

#[tokio::test]
async fn timeout_renders_as_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(page(json!([]), 0, 0).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let backend = common::backend_with_timeout(&server, Duration::from_millis(50));
    let controller: ListViewController<JobInstance, _> =
        ListViewController::new(&JOB_INSTANCES, Arc::new(backend));
    controller.submit().await;

    let result = controller.result();
    assert_eq!(result.error.as_deref(), Some("Request failed: timed out"));
    assert!(!result.loading);
}
