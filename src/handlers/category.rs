use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::prelude::Category;
use crate::error::AppResult;
use crate::models::category::CreateCategoryRequest;
use crate::models::common::{parse_id, ApiJson};
use crate::services::catalog;
use crate::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(catalog::list_categories(&state.store))
}

/// GET /api/categories/:id
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id, "category")?;
    Ok(Json(catalog::get_category(&state.store, id)?))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = catalog::create_category(&state.store, payload)?;
    Ok((StatusCode::CREATED, Json(category)))
}
