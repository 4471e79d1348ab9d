//! Integration tests for the court endpoints.

use actix_web::test;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

use crate::test_helpers::{body_json, create_test_app, sample_court, test_upload_settings};

#[actix_rt::test]
async fn test_list_courts_returns_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_court(1, "Court A"), sample_court(2, "Court B")]])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get().uri("/api/v1/courts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Courts retrieved successfully");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    // Court payloads keep snake_case field names.
    assert_eq!(body["data"][0]["is_active"], true);
    assert_eq!(body["data"][1]["name"], "Court B");
}

#[actix_rt::test]
async fn test_list_courts_empty_without_filter_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<court_booking_lib::entity::court::Model>::new()])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get().uri("/api/v1/courts").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = body_json(resp).await;
    // Empty result is a plain empty array, not null.
    assert_eq!(body["data"], json!([]));
}

#[actix_rt::test]
async fn test_list_courts_name_filter_miss_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<court_booking_lib::entity::court::Model>::new()])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/courts?name=nowhere")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Court not found");
    assert_eq!(body["data"], json!(null));
}

#[actix_rt::test]
async fn test_create_court() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_court(7, "Center Court")]])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/courts")
        .set_json(json!({"name": "Center Court", "description": "North camera hall"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Court created successfully");
    assert_eq!(body["data"]["id"], 7);
    assert_eq!(body["data"]["name"], "Center Court");
}

#[actix_rt::test]
async fn test_create_court_missing_name_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/courts")
        .set_json(json!({"description": "no name"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Court name is required");
}

#[actix_rt::test]
async fn test_create_court_malformed_json_is_enveloped_400() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/courts")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid JSON payload");
}
