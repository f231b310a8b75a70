use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use user_service::api::AppState;
use user_service::config::Config;
use user_service::models::{User, UserPayload};
use user_service::services::{UserError, UserService};

/// A backend that is never ready and holds no users.
struct UnavailableUserService;

#[async_trait::async_trait]
impl UserService for UnavailableUserService {
    async fn list_users(&self) -> Result<Vec<User>, UserError> {
        Ok(Vec::new())
    }

    async fn get_user(&self, id: i64) -> Result<User, UserError> {
        Err(UserError::NotFound(id))
    }

    async fn create_user(&self, _payload: UserPayload) -> Result<User, UserError> {
        Err(UserError::Internal("store offline".to_string()))
    }

    async fn update_user(&self, id: i64, _payload: UserPayload) -> Result<User, UserError> {
        Err(UserError::NotFound(id))
    }

    async fn delete_user(&self, id: i64) -> Result<(), UserError> {
        Err(UserError::NotFound(id))
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

fn spawn_app_with(config: Config) -> Router {
    let state = user_service::api::create_app_state_from_config(config, None);
    user_service::api::router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_endpoint() {
    let mut config = Config::default();
    config.general.environment = "staging".to_string();
    let app = spawn_app_with(config);

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "user-service");
    assert_eq!(body["environment"], "staging");
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
}

#[tokio::test]
async fn test_ready_endpoint() {
    let app = spawn_app_with(Config::default());

    let (status, body) = get(&app, "/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["service"], "user-service");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_unavailable_backend() {
    let state = Arc::new(AppState::new(
        Config::default(),
        Arc::new(UnavailableUserService),
        None,
    ));
    let app = user_service::api::router(state);

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["detail"], "Service not ready");

    // Liveness is independent of readiness.
    let (status, _) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_internal_errors_are_masked() {
    let state = Arc::new(AppState::new(
        Config::default(),
        Arc::new(UnavailableUserService),
        None,
    ));
    let app = user_service::api::router(state);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"username":"a","email":"a@x.com","full_name":"A"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body_json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body_json["detail"], "An internal error occurred");
}

#[tokio::test]
async fn test_service_info() {
    let app = spawn_app_with(Config::default());

    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "User Service");
    assert_eq!(body["endpoints"]["users"], "/users");
    assert_eq!(body["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let app = spawn_app_with(Config::default());

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = spawn_app_with(Config::default());

    let (status, body) = get(&app, "/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

#[tokio::test]
async fn test_response_headers() {
    let app = spawn_app_with(Config::default());

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = spawn_app_with(Config::default());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/users")
                .header("Origin", "http://frontend.example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
