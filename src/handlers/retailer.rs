//! Retailer profile and verification handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::entities::prelude::{Retailer, VerificationDocument, VerificationStatus};
use crate::error::AppResult;
use crate::models::common::{parse_id, ApiJson};
use crate::models::retailer::{
    RegisterRetailerRequest, UpdateRetailerRequest, VerificationStatusRequest,
};
use crate::services::retailers;
use crate::AppState;

/// Register a retailer profile for an existing user
///
/// POST /api/retailers/register
///
/// The owning user's role becomes `retailer`. Returns 404 for an unknown user
/// and 409 when the user already has a profile.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRetailerRequest>,
) -> AppResult<(StatusCode, Json<Retailer>)> {
    let retailer = retailers::register_retailer(&state.store, payload)?;
    Ok((StatusCode::CREATED, Json(retailer)))
}

pub async fn get_retailer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Retailer>> {
    let id = parse_id(&id, "retailer")?;
    Ok(Json(retailers::get_retailer(&state.store, id)?))
}

/// GET /api/users/:userId/retailer
pub async fn get_retailer_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Retailer>> {
    let user_id = parse_id(&user_id, "user")?;
    Ok(Json(retailers::get_retailer_by_user(&state.store, user_id)?))
}

pub async fn update_retailer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateRetailerRequest>,
) -> AppResult<Json<Retailer>> {
    let id = parse_id(&id, "retailer")?;
    Ok(Json(retailers::update_retailer(&state.store, id, payload)?))
}

/// POST /api/retailers/:id/documents
pub async fn add_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<VerificationDocument>,
) -> AppResult<(StatusCode, Json<Retailer>)> {
    let id = parse_id(&id, "retailer")?;
    let retailer = retailers::add_verification_document(&state.store, id, payload)?;
    Ok((StatusCode::CREATED, Json(retailer)))
}

/// PATCH /api/retailers/:id/verification
pub async fn set_verification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<VerificationStatusRequest>,
) -> AppResult<Json<Retailer>> {
    let id = parse_id(&id, "retailer")?;
    let retailer = retailers::set_verification_status(
        &state.store,
        state.config.verification,
        id,
        payload.status,
    )?;
    Ok(Json(retailer))
}

pub async fn list_pending(State(state): State<AppState>) -> Json<Vec<Retailer>> {
    Json(retailers::list_by_status(&state.store, VerificationStatus::Pending))
}

pub async fn list_verified(State(state): State<AppState>) -> Json<Vec<Retailer>> {
    Json(retailers::list_by_status(&state.store, VerificationStatus::Verified))
}
