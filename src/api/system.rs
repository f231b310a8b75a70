//! Service info and probe endpoints.

use axum::{Json, extract::State};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{ApiError, AppState, HealthResponse, ReadyResponse, ServiceInfo};
use crate::config::SERVICE_NAME;

/// `GET /`
pub async fn service_info() -> Json<ServiceInfo> {
    let endpoints = BTreeMap::from([
        ("health", "/health"),
        ("ready", "/ready"),
        ("users", "/users"),
        ("metrics", "/metrics"),
    ]);

    Json(ServiceInfo {
        service: "User Service",
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        endpoints,
    })
}

/// `GET /health`
///
/// Liveness probe. Always healthy while the process can answer.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now(),
        uptime: state.start_time.elapsed().as_secs_f64(),
        environment: state.config().general.environment.clone(),
    })
}

/// `GET /ready`
///
/// Readiness probe. Returns 503 when the user service reports it cannot
/// serve requests.
pub async fn ready(State(state): State<Arc<AppState>>) -> Result<Json<ReadyResponse>, ApiError> {
    if !state.user_service().is_ready().await {
        return Err(ApiError::ServiceUnavailable("Service not ready".to_string()));
    }

    Ok(Json(ReadyResponse {
        status: "ready",
        service: SERVICE_NAME,
        timestamp: Utc::now(),
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
