//! Integration tests for the health endpoint.

use std::collections::BTreeMap;

use actix_web::test;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Value};

use crate::test_helpers::{body_json, create_test_app, test_upload_settings};

#[actix_rt::test]
async fn test_health_reports_connected() {
    let dir = tempfile::tempdir().unwrap();
    // One row back from the SELECT 1 probe.
    let probe_row: BTreeMap<&str, Value> = BTreeMap::from([("?column?", Value::Int(Some(1)))]);
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![probe_row]])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Service is healthy");
    assert_eq!(body["data"]["database"], "connected");
    assert!(body["data"]["timestamp"].is_string());
    assert!(body["data"]["version"].is_string());
}

#[actix_rt::test]
async fn test_health_unreachable_store_is_still_200() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection refused".to_string(),
        ))])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;

    // A failed probe only downgrades the payload, never the status.
    assert_eq!(resp.status(), 200);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["database"], "disconnected");
}
