//! Common test utilities for kanban integration tests
//!
//! This file contains shared functions for all integration tests: test
//! application setup and helpers that create users, categories and cards
//! through the HTTP API.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use kanban::{create_app, db::init_pool, run_migrations};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::Service;

/// Creates a test application backed by a private in-memory SQLite database
///
/// The database is a uniquely named shared-cache in-memory database, so
/// every pooled connection sees the same schema while tests stay isolated.
///
/// ### Returns
///
/// An Axum Router configured with all routes
pub fn create_test_app() -> Router {
    let database_url = format!("file:it_{}?mode=memory&cache=shared", uuid::Uuid::new_v4());
    let pool = init_pool(&database_url).unwrap();

    let mut conn = pool.get().unwrap();
    run_migrations(&mut conn).unwrap();
    drop(conn);

    create_app(Arc::new(pool))
}

/// Sends a JSON request and returns the status and the decoded body
///
/// An empty response body decodes to `Value::Null`.
pub async fn send(app: &mut Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.call(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Registers a user and returns its serialized form
pub async fn create_user(app: &mut Router, name: &str, password: &str) -> Value {
    let (status, user) = send(
        app,
        "POST",
        "/user",
        json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "password": password
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create user failed: {}", user);
    user
}

/// Creates a card category for a user and returns its serialized form
pub async fn create_category(app: &mut Router, user_id: &str, name: &str, color: &str) -> Value {
    let (status, category) = send(
        app,
        "POST",
        "/card-category",
        json!({"user_id": user_id, "name": name, "color": color}),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create category failed: {}", category);
    category
}

/// Creates a card for a user in the given category and returns its serialized form
pub async fn create_card(app: &mut Router, user_id: &str, category_id: &str, title: &str) -> Value {
    let (status, card) = send(
        app,
        "POST",
        "/card",
        json!({
            "user_id": user_id,
            "category_id": category_id,
            "title": title,
            "status": "todo"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create card failed: {}", card);
    card
}

/// Extracts a string field, panicking with context if it is absent
pub fn str_field<'a>(value: &'a Value, field: &str) -> &'a str {
    value[field]
        .as_str()
        .unwrap_or_else(|| panic!("field {} missing from {}", field, value))
}

/// Parses an RFC 3339 timestamp field into a UTC instant
pub fn time_field(value: &Value, field: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(str_field(value, field))
        .unwrap_or_else(|e| panic!("field {} is not RFC 3339: {}", field, e))
        .with_timezone(&Utc)
}
