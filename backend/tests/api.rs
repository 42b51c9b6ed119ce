use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use medical_journey_backend::config::AppConfig;
use medical_journey_backend::storage::DbConnection;
use medical_journey_backend::{create_router, AppState};

async fn test_app() -> Router {
    let db = DbConnection::in_memory()
        .await
        .expect("Failed to create test database");
    create_router(AppState::new(db), &AppConfig::default()).expect("Failed to build router")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    dispatch(app, request).await
}

async fn send_raw(app: &Router, method: &str, uri: &str, content_type: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

/// Every response body must be JSON
async fn dispatch(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_child(app: &Router, name: &str) -> i64 {
    let (status, body) = send(app, "POST", "/api/children", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["child"]["id"].as_i64().unwrap()
}

async fn log_symptom(app: &Router, child_id: i64, name: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/symptoms",
        Some(json!({ "child_id": child_id, "name": name, "date_logged": "2025-07-20T10:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["record"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn delete_child_without_symptoms() {
    let app = test_app().await;
    let amy = create_child(&app, "Amy").await;

    let (status, check) = send(&app, "GET", &format!("/api/children/{}/deletion-check", amy), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["can_delete"], true);
    assert_eq!(check["block_reason"], Value::Null);

    let (status, body) = send(&app, "DELETE", &format!("/api/children/{}", amy), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["child_id"], amy);
    assert_eq!(body["success_message"], "Child deleted successfully.");

    let (status, _) = send(&app, "GET", &format!("/api/children/{}", amy), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_child_with_symptoms_is_refused() {
    let app = test_app().await;
    let ben = create_child(&app, "Ben").await;
    log_symptom(&app, ben, "Fever").await;

    let (status, check) = send(&app, "GET", &format!("/api/children/{}/deletion-check", ben), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(check["can_delete"], false);
    assert_eq!(check["symptom_count"], 1);
    assert_eq!(
        check["block_reason"],
        "This child has one or more symptoms. Please delete the symptoms first before deleting the child."
    );

    let (status, body) = send(&app, "DELETE", &format!("/api/children/{}", ben), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "DELETE_BLOCKED");
    assert_eq!(
        body["error"]["message"],
        "Delete blocked: this child has symptoms. Delete those first."
    );

    let (status, details) = send(&app, "GET", &format!("/api/children/{}", ben), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(details["symptoms"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_symptom_then_child() {
    let app = test_app().await;
    let ben = create_child(&app, "Ben").await;
    let fever = log_symptom(&app, ben, "Fever").await;

    let (status, body) = send(&app, "DELETE", &format!("/api/symptoms/{}", fever), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], fever);
    assert_eq!(body["child_id"], ben);
    assert_eq!(body["success_message"], "Symptom deleted successfully.");

    let (status, _) = send(&app, "DELETE", &format!("/api/children/{}", ben), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let app = test_app().await;

    for (method, uri) in [
        ("GET", "/api/children/999/deletion-check"),
        ("DELETE", "/api/children/999"),
        ("DELETE", "/api/symptoms/999"),
        ("GET", "/api/notes/999"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{} {}", method, uri);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

#[tokio::test]
async fn delete_symptom_twice() {
    let app = test_app().await;
    let ben = create_child(&app, "Ben").await;
    let fever = log_symptom(&app, ben, "Fever").await;

    let (status, _) = send(&app, "DELETE", &format!("/api/symptoms/{}", fever), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &format!("/api/symptoms/{}", fever), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_child_is_rejected_with_field_errors() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/children",
        Some(json!({ "name": "", "date_of_birth": null })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["error"]["fields"][0]["field"], "name");
    assert_eq!(body["error"]["fields"][0]["message"], "Name is required.");

    let (_, list) = send(&app, "GET", "/api/children", None).await;
    assert!(list["children"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_name_and_date_are_reported_together() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/children",
        Some(json!({ "name": "", "date_of_birth": "bad" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let fields: Vec<&str> = body["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "date_of_birth"]);
    assert_eq!(body["error"]["fields"][0]["message"], "Name is required.");
}

#[tokio::test]
async fn missing_name_is_a_field_error() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/children",
        Some(json!({ "date_of_birth": "2019-01-01" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_FAILED");
    assert_eq!(body["error"]["fields"][0]["field"], "name");
    assert_eq!(body["error"]["fields"][0]["message"], "Name is required.");
}

#[tokio::test]
async fn malformed_requests_use_the_error_envelope() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api/children/abc/deletion-check", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send(&app, "DELETE", "/api/caregivers/1/children/x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send_raw(&app, "POST", "/api/children", "application/json", "{\"name\":").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send_raw(&app, "POST", "/api/notes", "text/plain", "hello").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    let (status, body) = send(
        &app,
        "POST",
        "/api/symptoms",
        Some(json!({ "child_id": "one", "name": "Fever" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["fields"][0]["field"], "child_id");
}

#[tokio::test]
async fn symptom_for_missing_child_is_not_found() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/symptoms",
        Some(json!({ "child_id": 42, "name": "Fever" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn child_lifecycle_with_records() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/children",
        Some(json!({ "name": "  Amy ", "date_of_birth": "2019-03-04" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success_message"], "Child added successfully!");
    assert_eq!(created["child"]["name"], "Amy");
    let amy = created["child"]["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/children/{}", amy),
        Some(json!({ "name": "Amelia" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["child"]["name"], "Amelia");
    assert_eq!(updated["child"]["date_of_birth"], Value::Null);

    let (status, _) = send(
        &app,
        "POST",
        "/api/notes",
        Some(json!({ "child_id": amy, "content": "Slept well" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/appointments",
        Some(json!({ "child_id": amy, "doctor": "Dr. Lee", "date": "2025-08-01T09:30" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, caregiver) = send(
        &app,
        "POST",
        "/api/caregivers",
        Some(json!({ "full_name": "Maria Lopez" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let maria = caregiver["id"].as_i64().unwrap();

    let uri = format!("/api/caregivers/{}/children/{}", maria, amy);
    let (first_status, first) = send(&app, "PUT", &uri, None).await;
    let (_, second) = send(&app, "PUT", &uri, None).await;
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first["id"], second["id"]);

    let (_, details) = send(&app, "GET", &format!("/api/children/{}", amy), None).await;
    assert_eq!(details["notes"].as_array().unwrap().len(), 1);
    assert_eq!(details["appointments"][0]["date"], "2025-08-01T09:30:00");
    assert_eq!(details["caregivers"][0]["full_name"], "Maria Lopez");

    // Notes, appointments and assignments do not block the delete
    let (status, _) = send(&app, "DELETE", &format!("/api/children/{}", amy), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, children) = send(&app, "GET", &format!("/api/caregivers/{}/children", maria), None).await;
    assert!(children["children"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn overview_lists_children_with_symptoms() {
    let app = test_app().await;
    let ben = create_child(&app, "Ben").await;
    create_child(&app, "Amy").await;
    log_symptom(&app, ben, "Fever").await;

    let (status, body) = send(&app, "GET", "/api/children/overview", None).await;
    assert_eq!(status, StatusCode::OK);

    let children = body["children"].as_array().unwrap();
    assert_eq!(children[0]["child"]["name"], "Amy");
    assert!(children[0]["symptoms"].as_array().unwrap().is_empty());
    assert_eq!(children[1]["symptoms"][0]["name"], "Fever");
}
