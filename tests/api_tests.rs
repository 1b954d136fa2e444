//! API integration tests
//!
//! The router is driven in-process with `oneshot`, no server is started.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use eventmap_server::{
    config::AppConfig, create_router, repository::Repository, services::Services, AppState,
};

async fn app(seeded: bool) -> Router {
    let services = Services::new(Repository::new());
    if seeded {
        services.events.seed_samples().await;
    }
    create_router(AppState::new(AppConfig::default(), services))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn valid_event() -> Value {
    json!({
        "title": "Rust Meetup",
        "description": "Talks about async Rust",
        "location": {
            "name": "Berlin, DE",
            "latitude": 52.52,
            "longitude": 13.405
        },
        "date": "2030-03-01T18:30:00Z",
        "maxParticipants": 40
    })
}

fn titles(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = app(false).await;
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn test_create_and_fetch_event() {
    let app = app(false).await;

    let (status, body) = post_json(&app, "/api/events", valid_event()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let created = &body["data"];
    assert_eq!(created["title"], "Rust Meetup");
    assert_eq!(created["currentParticipants"], 0);
    assert_eq!(created["maxParticipants"], 40);
    assert!(created["createdAt"].is_string());
    let id = created["id"].as_str().unwrap();

    let (status, body) = get(&app, &format!("/api/events/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body["data"], created);
    assert!(body["data"].get("distance").is_none());
}

#[tokio::test]
async fn test_create_accepts_minute_precision_utc_date() {
    let app = app(false).await;

    let mut event = valid_event();
    event["date"] = json!("2030-03-01T18:30Z");
    let (status, body) = post_json(&app, "/api/events", event).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["date"], "2030-03-01T18:30:00Z");
}

#[tokio::test]
async fn test_create_assigns_distinct_ids() {
    let app = app(true).await;

    let (_, first) = post_json(&app, "/api/events", valid_event()).await;
    let (_, second) = post_json(&app, "/api/events", valid_event()).await;

    assert_ne!(first["data"]["id"], second["data"]["id"]);
    let (_, list) = get(&app, "/api/events").await;
    assert_eq!(list["count"], 5);
}

#[tokio::test]
async fn test_create_rejects_invalid_input() {
    let app = app(false).await;

    let mut bad_latitude = valid_event();
    bad_latitude["location"]["latitude"] = json!(95.0);
    let (status, body) = post_json(&app, "/api/events", bad_latitude).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "BAD_VALUE");
    assert_eq!(body["error"]["message"], "Valid latitude (-90 to 90) is required");

    let mut blank_title = valid_event();
    blank_title["title"] = json!("   ");
    let (status, _) = post_json(&app, "/api/events", blank_title).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut bad_date = valid_event();
    bad_date["date"] = json!("someday");
    let (status, body) = post_json(&app, "/api/events", bad_date).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Date must be a valid ISO 8601 date string");

    let mut several_bad = valid_event();
    several_bad["title"] = json!("");
    several_bad["date"] = json!("someday");
    let (status, body) = post_json(&app, "/api/events", several_bad).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "Title is required and must be a non-empty string"
    );

    let mut no_capacity = valid_event();
    no_capacity["maxParticipants"] = json!(0);
    let (status, _) = post_json(&app, "/api/events", no_capacity).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut missing_location = valid_event();
    missing_location.as_object_mut().unwrap().remove("location");
    let (status, body) = post_json(&app, "/api/events", missing_location).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let (_, list) = get(&app, "/api/events").await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn test_get_unknown_event_is_404() {
    let app = app(true).await;
    let (status, body) = get(&app, "/api/events/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert_eq!(body["error"]["message"], "Event with ID 999 not found");
}

#[tokio::test]
async fn test_list_filters() {
    let app = app(true).await;

    let (status, body) = get(&app, "/api/events?search=tech").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Tech Meetup"]);
    assert_eq!(body["count"], 1);

    let (_, body) = get(&app, "/api/events?location=san%20francisco").await;
    assert_eq!(titles(&body), ["Tech Meetup"]);

    let (_, body) = get(&app, "/api/events?location=CA&search=music").await;
    assert_eq!(titles(&body), ["Music Festival"]);

    let (status, body) = get(&app, "/api/events?search=nothing-matches").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_list_sorted_by_distance() {
    let app = app(true).await;

    // Just outside New York
    let (_, body) = get(&app, "/api/events?userLat=40.73&userLng=-73.93").await;

    assert_eq!(titles(&body), ["Coding Workshop", "Music Festival", "Tech Meetup"]);
    let distances: Vec<f64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["distance"].as_f64().unwrap())
        .collect();
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_list_without_origin_has_no_distance() {
    let app = app(true).await;

    let (_, body) = get(&app, "/api/events").await;

    assert_eq!(titles(&body), ["Tech Meetup", "Music Festival", "Coding Workshop"]);
    assert!(body["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e.get("distance").is_none()));

    let (_, again) = get(&app, "/api/events").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_get_event_with_origin() {
    let app = app(true).await;

    let (status, body) = get(&app, "/api/events/1?userLat=34.0522&userLng=-118.2437").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Tech Meetup");
    let distance = body["data"]["distance"].as_f64().unwrap();
    assert!((distance - 559.0).abs() <= 2.0, "got {}", distance);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = app(false).await;
    let (status, body) = get(&app, "/api/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Route /api/nowhere not found");
}
