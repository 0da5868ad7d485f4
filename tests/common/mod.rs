#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use freshmart_backend::{config::AppConfig, routes::build_router, store::MemStore, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router over a freshly seeded store with default pricing and policy.
pub fn test_app() -> Router {
    test_app_with(AppConfig::default())
}

pub fn test_app_with(config: AppConfig) -> Router {
    build_router(AppState::new(MemStore::seeded(), config))
}

/// Send one request and decode the JSON response body.
///
/// Non-JSON bodies (the plain-text banner) come back as `Value::String`.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Cart line snapshot for a seeded product.
pub fn item(product_id: i32, quantity: u32, price: f64, name: &str) -> Value {
    json!({
        "productId": product_id,
        "quantity": quantity,
        "price": price,
        "name": name,
        "image": "https://images.example.com/item.jpg",
        "unitValue": 1,
        "unitType": "pc"
    })
}

pub fn user_body(username: &str, email: &str) -> Value {
    json!({
        "username": username,
        "password": "secret123",
        "name": "Test User",
        "email": email,
        "phone": "9876543210",
        "address": "12 MG Road",
        "city": "Pune",
        "pincode": "411001"
    })
}

pub fn retailer_body(user_id: i64) -> Value {
    json!({
        "userId": user_id,
        "businessName": "Sharma Kirana Store",
        "businessType": "grocery",
        "gstNumber": "27AAPFU0939F1ZV",
        "panNumber": "AAPFU0939F",
        "businessAddress": "45 Market Yard",
        "businessCity": "Pune",
        "businessPincode": "411037",
        "businessPhone": "9822012345"
    })
}

/// Register a user and return its id.
pub async fn register_user(app: &Router, username: &str) -> i64 {
    let email = format!("{}@example.com", username);
    let (status, body) = post(app, "/api/users/register", user_body(username, &email)).await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    body["id"].as_i64().unwrap()
}

/// Register a user plus retailer profile and return the retailer id.
pub async fn register_retailer(app: &Router, username: &str) -> i64 {
    let user_id = register_user(app, username).await;
    let (status, body) = post(app, "/api/retailers/register", retailer_body(user_id)).await;
    assert_eq!(status, StatusCode::CREATED, "retailer register failed: {}", body);
    body["id"].as_i64().unwrap()
}

pub async fn verify_retailer(app: &Router, retailer_id: i64) {
    let (status, _) = patch(
        app,
        &format!("/api/retailers/{}/verification", retailer_id),
        json!({ "status": "verified" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
