use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::entities::prelude::Product;
use crate::error::AppResult;
use crate::models::common::{parse_id, ApiJson};
use crate::models::product::{CreateProductRequest, ProductListQuery, UpdateStockRequest};
use crate::services::catalog;
use crate::AppState;

/// List products
///
/// GET /api/products
///
/// # Query Parameters
///
/// - `categoryId` - Only products in this category (takes precedence)
/// - `search` - Case-insensitive match on name or description
///
/// With neither parameter every product is returned in insertion order.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let filter = query.into_filter()?;
    Ok(Json(catalog::list_products(&state.store, filter)))
}

/// GET /api/products/popular
pub async fn list_popular(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(catalog::list_popular(&state.store))
}

/// GET /api/products/new
pub async fn list_new_arrivals(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(catalog::list_new_arrivals(&state.store))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id, "product")?;
    Ok(Json(catalog::get_product(&state.store, id)?))
}

pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = catalog::create_product(&state.store, payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product's stock
///
/// PATCH /api/products/:id/stock
///
/// ```json
/// { "stock": 25 }
/// ```
pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateStockRequest>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id, "product")?;
    let stock = payload.validate()?;
    Ok(Json(catalog::update_stock(&state.store, id, stock)?))
}
