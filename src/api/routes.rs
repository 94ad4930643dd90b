//! Application route configuration.

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::cliente_routes;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::API_BASE_PATH;
use crate::errors::{AppError, AppResult};

/// Create the application router with all routes configured
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // REST API, reachable cross-origin only from the configured front-end
        .nest(API_BASE_PATH, cliente_routes().layer(cors))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy admitting a single front-end origin
pub fn cors_layer(allowed_origin: &str) -> AppResult<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin).map_err(|e| {
        AppError::internal(format!("Invalid CORS origin '{}': {}", allowed_origin, e))
    })?;

    // A list echoes the header only for matching request origins
    Ok(CorsLayer::new()
        .allow_origin([origin])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any))
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    services: ServiceHealth,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceHealth {
    database: ServiceStatus,
}

/// Service status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, db_status) = match state.database.ping().await {
        Ok(_) => (
            StatusCode::OK,
            ServiceStatus {
                status: "healthy",
                error: None,
            },
        ),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ServiceStatus {
                    status: "unhealthy",
                    error: Some(e.to_string()),
                },
            )
        }
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK {
            "healthy"
        } else {
            "degraded"
        },
        services: ServiceHealth { database: db_status },
    };

    (status_code, Json(response))
}
