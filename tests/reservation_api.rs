//! HTTP-level tests for the reservation routes, run against the in-memory store.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use games_store::gateway::build_router;
use games_store::{AppState, MemoryReservationStore};

const JUAN: &str = r#"{ "gameId":1, "name":"Juan", "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.com" }"#;
const JOHN: &str = r#"{ "gameId":1, "name":"John", "lastName":"Doe", "documentNumber":"0002", "email":"mail2@mail.com" }"#;

fn app() -> Router {
    build_router(Arc::new(AppState::new(Arc::new(MemoryReservationStore::new()))))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(b.to_owned())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn empty_list_is_ok() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/reservation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_created_record() {
    let app = app();
    let (status, body) = send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Juan");
    assert_eq!(body["id"], 1);
    assert_eq!(body["gameId"], 1);

    let upper = r#"{ "gameId":2, "name":"Juan", "lastName":"Perez", "documentNumber":"0001", "email":"MAIL1@MAIL.COM" }"#;
    let (status, body) = send_json(&app, Method::POST, "/reservation", Some(upper)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Juan");

    let (status, body) = send_json(&app, Method::GET, "/reservation/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn create_with_missing_field_is_bad_request() {
    let app = app();
    let payloads = [
        r#"{ "gameId":1, "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.com" }"#,
        r#"{ "gameId":0, "name":"Juan", "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.com" }"#,
        r#"{ "name":"Juan", "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.com" }"#,
        r#"{ "gameId":1, "name":"Juan", "documentNumber":"0001", "email":"mail1@mail.com" }"#,
        r#"{ "gameId":1, "name":"Juan", "lastName":"Perez", "email":"mail1@mail.com" }"#,
        r#"{ "gameId":1, "name":"Juan", "lastName":"Perez", "documentNumber":"0001" }"#,
        r#"{ "gameId":1, "name":null, "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.com" }"#,
    ];
    for payload in payloads {
        let (status, body) = send_json(&app, Method::POST, "/reservation", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body["message"], "Empty field on creation request");
        assert_eq!(body["path"], "/reservation");
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn create_with_invalid_email_is_bad_request() {
    let app = app();
    for email in ["mail1mail.com", "mail1@mail"] {
        let payload = json!({
            "gameId": 1, "name": "Juan", "lastName": "Perez",
            "documentNumber": "0001", "email": email,
        })
        .to_string();
        let (status, body) = send_json(&app, Method::POST, "/reservation", Some(&payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid email on creation request");
    }
}

#[tokio::test]
async fn duplicate_reservation_is_bad_request() {
    let app = app();
    let (status, _) = send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User 0001 has already reserved game 1");
}

#[tokio::test]
async fn concurrent_duplicate_creates_leave_one_winner() {
    let app = app();
    let (first, second) = tokio::join!(
        send_json(&app, Method::POST, "/reservation", Some(JUAN)),
        send_json(&app, Method::POST, "/reservation", Some(JUAN)),
    );

    let mut statuses = [first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::BAD_REQUEST]);

    let loser = if first.0 == StatusCode::BAD_REQUEST { first.1 } else { second.1 };
    assert_eq!(loser["message"], "User 0001 has already reserved game 1");

    let (_, body) = send_json(&app, Method::GET, "/reservation/game/1", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

fn assert_error_body(body: &Value, path: &str) {
    assert!(body["message"].is_string(), "body: {}", body);
    assert_eq!(body["path"], path);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn malformed_body_gets_error_body() {
    let app = app();
    let payloads = [
        r#"{ "gameId":"one", "name":"Juan", "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.com" }"#,
        r#"{ "gameId":1, "name":"Juan""#,
        r#""Juan Perez""#,
    ];
    for payload in payloads {
        let (status, body) = send_json(&app, Method::POST, "/reservation", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_error_body(&body, "/reservation");
    }

    let (status, body) = send_json(&app, Method::PUT, "/reservation/1", Some(r#"{ "gameId":true }"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, "/reservation/1");
}

#[tokio::test]
async fn missing_content_type_gets_error_body() {
    let app = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/reservation")
        .body(Body::from(JUAN))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_error_body(&body, "/reservation");
}

#[tokio::test]
async fn non_numeric_ids_get_error_body() {
    let app = app();
    let cases = [
        (Method::GET, "/reservation/abc"),
        (Method::DELETE, "/reservation/abc"),
        (Method::GET, "/reservation/game/abc"),
        (Method::DELETE, "/reservation/delete/abc"),
    ];
    for (method, uri) in cases {
        let (status, body) = send_json(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
        assert_error_body(&body, uri);
    }

    let (status, body) = send_json(&app, Method::POST, "/reservation/abc", Some(JUAN)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body, "/reservation/abc");
}

#[tokio::test]
async fn get_by_id_and_not_found() {
    let app = app();
    send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;

    let (status, body) = send_json(&app, Method::GET, "/reservation/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Juan");

    let (status, body) = send_json(&app, Method::GET, "/reservation/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Reservation 2 does not exist");
    assert_eq!(body["path"], "/reservation/2");
}

#[tokio::test]
async fn get_by_game_id_and_not_found() {
    let app = app();
    send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;
    send_json(&app, Method::POST, "/reservation", Some(JOHN)).await;

    let (status, body) = send_json(&app, Method::GET, "/reservation/game/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send_json(&app, Method::GET, "/reservation/game/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no reservations for game 2");
}

#[tokio::test]
async fn update_reservation() {
    let app = app();
    send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;

    let changed = r#"{ "gameId":1, "name":"Juana", "lastName":"Perez", "documentNumber":"0001", "email":"mail1@mail.cl" }"#;
    let (status, body) = send_json(&app, Method::POST, "/reservation/1", Some(changed)).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Juana");

    let (status, body) = send_json(&app, Method::PUT, "/reservation/1", Some(JUAN)).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["name"], "Juan");

    let (status, body) = send_json(&app, Method::POST, "/reservation/9", Some(JUAN)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Reservation 9 does not exist");
}

#[tokio::test]
async fn update_validation_errors() {
    let app = app();
    send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;
    send_json(&app, Method::POST, "/reservation", Some(JOHN)).await;

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/reservation/1",
        Some(r#"{ "name":"Juan", "email":"mail1@mail.com" }"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Empty field on update request");

    let bad_email = r#"{ "gameId":1,"name":"Juan", "lastName":"Perez", "documentNumber":"0001", "email":"mail1mail.com" }"#;
    let (status, body) = send_json(&app, Method::PUT, "/reservation/1", Some(bad_email)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email on update request");

    // Moving reservation 1 onto John's document number collides
    let collide = r#"{ "gameId":1, "name":"Juan", "lastName":"Perez", "documentNumber":"0002", "email":"mail1@mail.com" }"#;
    let (status, body) = send_json(&app, Method::POST, "/reservation/1", Some(collide)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "User 0002 has already reserved game 1");
}

#[tokio::test]
async fn delete_by_id() {
    let app = app();
    send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;

    let (status, body) = send(&app, Method::DELETE, "/reservation/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "Reservation 1 has been eliminated");

    let (status, body) = send_json(&app, Method::DELETE, "/reservation/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Reservation 1 does not exist");
}

#[tokio::test]
async fn delete_by_game_id() {
    let app = app();
    send_json(&app, Method::POST, "/reservation", Some(JUAN)).await;
    send_json(&app, Method::POST, "/reservation", Some(JOHN)).await;

    let (status, body) = send(&app, Method::DELETE, "/reservation/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        "2 reservations for game 1 have been eliminated"
    );

    let (status, body) = send_json(&app, Method::DELETE, "/reservation/delete/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "There is no reservations for game 1");

    let (_, body) = send_json(&app, Method::GET, "/reservation", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn health_reports_store() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = app();
    let (status, body) = send_json(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/reservation/{id}"].is_object());
}
