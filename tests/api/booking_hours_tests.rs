//! Integration tests for the booking hour endpoints.

use actix_web::test;
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::json;

use court_booking_lib::entity::{booking_hour, court};

use crate::test_helpers::{
    body_json, create_test_app, sample_booking_hour, sample_court, test_upload_settings,
};

#[actix_rt::test]
async fn test_list_booking_hours_camel_case_fields() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![sample_booking_hour(3, 1)]])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/booking-hours?courtId=1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = body_json(resp).await;
    assert_eq!(body["success"], true);
    let row = &body["data"][0];
    // courtId/dateStart/dateEnd are camelCase on this resource.
    assert_eq!(row["courtId"], 1);
    assert!(row["dateStart"].is_string());
    assert!(row["dateEnd"].is_string());
    assert_eq!(row["status"], "active");
}

#[actix_rt::test]
async fn test_list_booking_hours_empty_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<booking_hour::Model>::new()])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/booking-hours")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body = body_json(resp).await;
    assert_eq!(body["data"], json!([]));
}

#[actix_rt::test]
async fn test_list_booking_hours_non_integer_filter_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/booking-hours?courtId=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid court ID");
}

#[actix_rt::test]
async fn test_create_booking_hour() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        // Court existence check, then the insert's RETURNING row.
        .append_query_results([vec![sample_court(1, "Court A")]])
        .append_query_results([vec![sample_booking_hour(9, 1)]])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/booking-hours")
        .set_json(json!({
            "courtId": 1,
            "dateStart": "2025-06-01T18:00:00Z",
            "dateEnd": "2025-06-01T19:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Booking hour created successfully");
    assert_eq!(body["data"]["id"], 9);
    assert_eq!(body["data"]["status"], "active");
}

#[actix_rt::test]
async fn test_create_booking_hour_missing_court_id_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/booking-hours")
        .set_json(json!({
            "dateStart": "2025-06-01T18:00:00Z",
            "dateEnd": "2025-06-01T19:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Court ID is required");
}

#[actix_rt::test]
async fn test_create_booking_hour_missing_dates_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/booking-hours")
        .set_json(json!({"courtId": 1, "dateStart": "2025-06-01T18:00:00Z"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Date start and date end are required");
}

#[actix_rt::test]
async fn test_create_booking_hour_inactive_court_is_400() {
    let dir = tempfile::tempdir().unwrap();
    let conn = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<court::Model>::new()])
        .into_connection();

    let app = create_test_app(conn, test_upload_settings(dir.path())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/booking-hours")
        .set_json(json!({
            "courtId": 42,
            "dateStart": "2025-06-01T18:00:00Z",
            "dateEnd": "2025-06-01T19:00:00Z"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Referential failure on create is a validation error, not a 404.
    assert_eq!(resp.status(), 400);
    let body = body_json(resp).await;
    assert_eq!(body["message"], "Court not found or inactive");
}
