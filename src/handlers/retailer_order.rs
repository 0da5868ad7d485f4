use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::prelude::RetailerOrder;
use crate::error::AppResult;
use crate::models::common::{parse_id, ApiJson};
use crate::models::order::OrderStatusRequest;
use crate::models::retailer_order::{PaymentStatusRequest, PlaceRetailerOrderRequest};
use crate::services::retailer_orders;
use crate::AppState;

/// Place a bulk order
///
/// POST /api/retailer-orders
///
/// 404 for an unknown retailer, 403 unless the retailer is verified, then
/// the same stock rules as consumer orders.
pub async fn place_retailer_order(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<PlaceRetailerOrderRequest>,
) -> AppResult<(StatusCode, Json<RetailerOrder>)> {
    let order =
        retailer_orders::place_retailer_order(&state.store, &state.config.pricing, payload)?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_retailer_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RetailerOrder>> {
    let id = parse_id(&id, "order")?;
    Ok(Json(retailer_orders::get_retailer_order(&state.store, id)?))
}

/// GET /api/retailers/:retailerId/orders
pub async fn list_retailer_orders(
    State(state): State<AppState>,
    Path(retailer_id): Path<String>,
) -> AppResult<Json<Vec<RetailerOrder>>> {
    let retailer_id = parse_id(&retailer_id, "retailer")?;
    Ok(Json(retailer_orders::list_retailer_orders(&state.store, retailer_id)))
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<OrderStatusRequest>,
) -> AppResult<Json<RetailerOrder>> {
    let id = parse_id(&id, "order")?;
    let order = retailer_orders::update_retailer_order_status(&state.store, id, payload.status)?;
    Ok(Json(order))
}

pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<PaymentStatusRequest>,
) -> AppResult<Json<RetailerOrder>> {
    let id = parse_id(&id, "order")?;
    let order = retailer_orders::update_payment_status(&state.store, id, payload.status)?;
    Ok(Json(order))
}
