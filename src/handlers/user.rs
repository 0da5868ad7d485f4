use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::common::{parse_id, ApiJson};
use crate::models::user::{
    LoginRequest, LoginResponse, RegisterUserRequest, UpdateUserRequest, UserResponse,
};
use crate::services::users;
use crate::AppState;

/// POST /api/users/register
///
/// Returns 409 when the username or email is already taken.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = users::register_user(&state.store, payload)?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /api/users/login
///
/// No session or token is issued; the caller receives the user record.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = users::login(&state.store, payload)?;
    Ok(Json(LoginResponse { user: user.into() }))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_id(&id, "user")?;
    Ok(Json(users::get_user(&state.store, id)?.into()))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_id(&id, "user")?;
    Ok(Json(users::update_user(&state.store, id, payload)?.into()))
}
