mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::{get, item, patch, post, register_user, test_app};

fn order_body(user_id: i64, items: Vec<Value>) -> Value {
    json!({
        "userId": user_id,
        "items": items,
        "address": "12 MG Road, Pune - 411001",
        "paymentMethod": "cod"
    })
}

async fn stock_of(app: &axum::Router, product_id: i32) -> i64 {
    let (_, body) = get(app, &format!("/api/products/{}", product_id)).await;
    body["stock"].as_i64().unwrap()
}

#[tokio::test]
async fn test_place_order_decrements_stock_and_totals() {
    let app = test_app();
    let user_id = register_user(&app, "priya").await;

    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(user_id, vec![item(1, 5, 45.0, "Organic Milk")]),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "pending");
    assert_eq!(body["totalAmount"].as_f64(), Some(260.0));
    assert_eq!(body["deliveryFee"].as_f64(), Some(30.0));
    assert_eq!(body["platformFee"].as_f64(), Some(5.0));
    assert!(body["orderDate"].is_string());
    assert_eq!(body["expectedDelivery"].as_str().unwrap().len(), 5);

    assert_eq!(stock_of(&app, 1).await, 45);
}

#[tokio::test]
async fn test_insufficient_stock_rejects_order() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(1, vec![item(4, 3, 70.0, "Fresh Bananas")]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Not enough stock for Fresh Bananas. Available: 2");
    assert_eq!(stock_of(&app, 4).await, 2);

    let (_, orders) = get(&app, "/api/users/1/orders").await;
    assert!(orders.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_line_leaves_earlier_lines_untouched() {
    let app = test_app();

    let (status, _) = post(
        &app,
        "/api/orders",
        order_body(
            1,
            vec![item(1, 5, 45.0, "Organic Milk"), item(4, 3, 70.0, "Fresh Bananas")],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(stock_of(&app, 1).await, 50);
    assert_eq!(stock_of(&app, 4).await, 2);
}

#[tokio::test]
async fn test_repeated_product_lines_are_checked_together() {
    let app = test_app();

    let (status, _) = post(
        &app,
        "/api/orders",
        order_body(
            1,
            vec![item(4, 2, 70.0, "Fresh Bananas"), item(4, 1, 70.0, "Fresh Bananas")],
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(stock_of(&app, 4).await, 2);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let app = test_app();
    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(1, vec![item(999, 1, 10.0, "Ghost")]),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Product with id 999 not found");
}

#[tokio::test]
async fn test_total_out_of_range_is_validation_error() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/orders",
        order_body(1, vec![item(1, 4_000_000_000, 1e20, "Organic Milk")]),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "order total out of range");
    assert_eq!(stock_of(&app, 1).await, 50);
}

#[tokio::test]
async fn test_empty_items_is_validation_error() {
    let app = test_app();
    let (status, body) = post(&app, "/api/orders", order_body(1, vec![])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].as_array().unwrap().iter().any(|e| e["field"] == "items"));
}

#[tokio::test]
async fn test_exact_stock_drains_to_zero() {
    let app = test_app();
    let (status, _) = post(
        &app,
        "/api/orders",
        order_body(1, vec![item(4, 2, 70.0, "Fresh Bananas")]),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(stock_of(&app, 4).await, 0);

    let (status, _) = post(
        &app,
        "/api/orders",
        order_body(1, vec![item(4, 1, 70.0, "Fresh Bananas")]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_user_orders_in_placement_order() {
    let app = test_app();
    for qty in [1, 2] {
        let (status, _) = post(
            &app,
            "/api/orders",
            order_body(7, vec![item(2, qty, 60.0, "Free Range Eggs")]),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    post(&app, "/api/orders", order_body(8, vec![item(2, 1, 60.0, "Free Range Eggs")])).await;

    let (status, body) = get(&app, "/api/users/7/orders").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_order_status_transitions() {
    let app = test_app();
    post(&app, "/api/orders", order_body(1, vec![item(2, 1, 60.0, "Free Range Eggs")])).await;

    let (status, body) = patch(&app, "/api/orders/1/status", json!({ "status": "processing" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "processing");

    let (status, body) = patch(&app, "/api/orders/1/status", json!({ "status": "pending" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains("processing -> pending"));

    let (status, _) = patch(&app, "/api/orders/1/status", json!({ "status": "cancelled" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = patch(&app, "/api/orders/1/status", json!({ "status": "shipped" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_order_status_rejects_unknown_value() {
    let app = test_app();
    post(&app, "/api/orders", order_body(1, vec![item(2, 1, 60.0, "Free Range Eggs")])).await;

    let (status, _) = patch(&app, "/api/orders/1/status", json!({ "status": "lost" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_missing_order() {
    let app = test_app();
    let (status, body) = get(&app, "/api/orders/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Order not found");
}
