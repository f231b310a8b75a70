use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::extract::{ApiJson, ApiPath};
use super::{ApiError, AppState, MessageResponse};
use crate::models::{User, UserPayload};

pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service().list_users().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service().get_user(id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.user_service().create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replaces username, email and full name wholesale. `id` and `created_at`
/// are kept.
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UserPayload>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service().update_user(id, payload).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service().delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
