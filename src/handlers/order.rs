//! Consumer order handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::prelude::Order;
use crate::error::AppResult;
use crate::models::common::{parse_id, ApiJson};
use crate::models::order::{OrderStatusRequest, PlaceOrderRequest};
use crate::services::ordering;
use crate::AppState;

/// Place an order
///
/// POST /api/orders
///
/// Validates every line against live stock and decrements it in one step.
/// Nothing changes when any line fails.
///
/// # Request Body
///
/// ```json
/// {
///   "userId": 1,
///   "items": [
///     {
///       "productId": 1,
///       "quantity": 5,
///       "price": 45,
///       "name": "Organic Milk",
///       "image": "https://...",
///       "unitValue": 500,
///       "unitType": "ml"
///     }
///   ],
///   "address": "12 MG Road, Pune - 411001",
///   "paymentMethod": "cod"
/// }
/// ```
///
/// # Errors
///
/// - 400 for malformed input or insufficient stock
/// - 404 when an item references an unknown product
pub async fn place_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PlaceOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = ordering::place_order(&state.store, &state.config.pricing, payload)?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let id = parse_id(&id, "order")?;
    Ok(Json(ordering::get_order(&state.store, id)?))
}

/// GET /api/users/:userId/orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let user_id = parse_id(&user_id, "user")?;
    Ok(Json(ordering::list_user_orders(&state.store, user_id)))
}

/// PATCH /api/orders/:id/status
///
/// Rejects moves outside pending → processing → shipped → delivered (with
/// cancellation from pending or processing) with 409.
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<OrderStatusRequest>,
) -> AppResult<Json<Order>> {
    let id = parse_id(&id, "order")?;
    Ok(Json(ordering::update_order_status(&state.store, id, payload.status)?))
}
