//! End-to-end booking flow tests running against a SQLite-backed router.

mod fixtures;

use airtime_db::TimeSlotRepository;
use airtime_slots::logic::{book_range, BookingError};
use airtime_slots::routes::routes;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn seeds_books_and_reports_availability() {
    let app = fixtures::fresh_app().await;

    // Seed eleven one-second units.
    let (status, body) = post_json(
        &app,
        "/admin/slots",
        r#"{
            "programme_name": "Morning Drive",
            "plan_type_id": 2,
            "slot_from_date_time": "2025-06-01T10:00:00Z",
            "slot_to_date_time": "2025-06-01T10:00:10Z"
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "seeding failed: {body}");
    let definition: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(definition["programme_name"], "Morning Drive");

    let (status, body) = get(
        &app,
        "/slots/availability?from=2025-06-01T10:00:00Z&to=2025-06-01T10:00:10Z",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slots"].as_array().unwrap().len(), 11);

    // Book the first six units for user 5.
    let (status, body) = post_json(
        &app,
        "/slots/book",
        r#"{
            "user_id": 5,
            "from_date_time": "2025-06-01T10:00:00Z",
            "to_date_time": "2025-06-01T10:00:05Z",
            "programme_name": "Morning Drive",
            "plan_type_id": 2
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "booking failed: {body}");
    let receipt: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(receipt["success"], true);
    assert_eq!(receipt["booked_units"], 6);
    assert!(!receipt["booking_reference"].as_str().unwrap().is_empty());

    // Only the trailing five units remain available.
    let (status, body) = get(
        &app,
        "/slots/availability?from=2025-06-01T10:00:00Z&to=2025-06-01T10:00:10Z",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 5);
    assert_eq!(slots[0]["slot_time"], "2025-06-01T10:00:06+00:00");

    // An overlapping booking for another user is refused whole.
    let (status, body) = post_json(
        &app,
        "/slots/book",
        r#"{
            "user_id": 7,
            "from_date_time": "2025-06-01T10:00:04Z",
            "to_date_time": "2025-06-01T10:00:08Z",
            "programme_name": "Morning Drive",
            "plan_type_id": 2
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("not available"));

    // The refused booking must not have consumed the free tail.
    let (_, body) = get(
        &app,
        "/slots/availability?from=2025-06-01T10:00:06Z&to=2025-06-01T10:00:10Z",
    )
    .await;
    assert_eq!(body["slots"].as_array().unwrap().len(), 5);

    // The definition is listed back.
    let (status, body) = get(&app, "/admin/slots").await;
    assert_eq!(status, StatusCode::OK);
    let definitions = body["definitions"].as_array().unwrap();
    assert_eq!(definitions.len(), 1);
    assert_eq!(definitions[0]["programme_name"], "Morning Drive");
}

#[tokio::test]
async fn booking_an_unseeded_range_is_a_conflict() {
    let app = fixtures::fresh_app().await;

    let (status, body) = post_json(
        &app,
        "/slots/book",
        r#"{
            "user_id": 5,
            "from_date_time": "2025-06-01T11:00:00Z",
            "to_date_time": "2025-06-01T11:00:05Z",
            "programme_name": "Morning Drive",
            "plan_type_id": 2
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("not available"));
}

#[tokio::test]
async fn inverted_booking_range_is_a_bad_request() {
    let app = fixtures::fresh_app().await;

    let (status, body) = post_json(
        &app,
        "/slots/book",
        r#"{
            "user_id": 5,
            "from_date_time": "2025-06-01T10:00:05Z",
            "to_date_time": "2025-06-01T10:00:00Z",
            "programme_name": "Morning Drive",
            "plan_type_id": 2
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Invalid range"));
}

#[tokio::test]
async fn malformed_timestamp_is_a_bad_request() {
    let app = fixtures::fresh_app().await;

    let (status, body) = post_json(
        &app,
        "/slots/book",
        r#"{
            "user_id": 5,
            "from_date_time": "next tuesday",
            "to_date_time": "2025-06-01T10:00:05Z",
            "programme_name": "Morning Drive",
            "plan_type_id": 2
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("invalid timestamp"));
}

#[tokio::test]
async fn overlapping_seed_request_is_a_conflict() {
    let app = fixtures::fresh_app().await;

    let first = r#"{
        "programme_name": "Morning Drive",
        "plan_type_id": 2,
        "slot_from_date_time": "2025-06-01T10:00:00Z",
        "slot_to_date_time": "2025-06-01T10:00:10Z"
    }"#;
    let (status, _) = post_json(&app, "/admin/slots", first).await;
    assert_eq!(status, StatusCode::OK);

    let overlapping = r#"{
        "programme_name": "Evening Show",
        "plan_type_id": 3,
        "slot_from_date_time": "2025-06-01T10:00:05Z",
        "slot_to_date_time": "2025-06-01T10:00:15Z"
    }"#;
    let (status, body) = post_json(&app, "/admin/slots", overlapping).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("overlaps"));
}

#[tokio::test]
async fn concurrent_overlapping_bookings_have_one_winner() {
    let repo = fixtures::fresh_repo().await;
    fixtures::seed_range(&repo, 100, 111).await;

    let repo_a = repo.clone();
    let repo_b = repo.clone();
    let (a, b) = tokio::join!(
        book_range(&repo_a, 1, 5, 100, 111),
        book_range(&repo_b, 1, 7, 100, 111),
    );

    let winners = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(winners, 1, "exactly one booking may claim the range");
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(
        loser.unwrap_err(),
        BookingError::SlotNotAvailable
    ));

    // The winner holds the whole range; nothing was left half-claimed.
    let remaining = repo.find_available_in_range(100, 111).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn granularity_drives_the_expected_count_over_http() {
    // Sixty-second units: [10:00:00, 10:05:00] seeds six units, and a
    // booking over the same range must expect six, not three hundred.
    let repo = fixtures::fresh_repo().await;
    let config = std::sync::Arc::new(airtime_config::AppConfig {
        server: airtime_config::ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8086,
        },
        use_swagger_ui: false,
        database: None,
        booking: airtime_config::BookingConfig {
            granularity_seconds: 60,
        },
    });
    let app = routes(config, repo);

    let (status, _) = post_json(
        &app,
        "/admin/slots",
        r#"{
            "programme_name": "Hourly News",
            "plan_type_id": 1,
            "slot_from_date_time": "2025-06-01T10:00:00Z",
            "slot_to_date_time": "2025-06-01T10:05:00Z"
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post_json(
        &app,
        "/slots/book",
        r#"{
            "user_id": 5,
            "from_date_time": "2025-06-01T10:00:00Z",
            "to_date_time": "2025-06-01T10:05:00Z",
            "programme_name": "Hourly News",
            "plan_type_id": 1
        }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "booking failed: {body}");
    let receipt: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(receipt["booked_units"], 6);
}
