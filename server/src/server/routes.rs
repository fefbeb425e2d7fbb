//! Router configuration for the SupportApp server.
//!
//! Builds the complete Axum router with all endpoints and middleware.

use super::health::health_check;
use super::state::AppState;
use crate::api::requests;
use crate::config::CorsConfig;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Configures all routes:
/// - Support request CRUD endpoints
/// - Health check
///
/// plus the middleware stack: request id assignment and propagation,
/// request tracing, and CORS for the configured frontend origin.
///
/// # Arguments
///
/// - `state`: Application state to share with handlers
/// - `cors`: CORS configuration naming the allowed origin
pub fn build_router(state: AppState, cors: &CorsConfig) -> Router {
    // API routes
    let api_routes = Router::new()
        // Request management
        .route("/support-requests", get(requests::list_requests))
        .route("/support-requests", post(requests::create_request))
        // Health check; the static segment wins over "/:id"
        .route("/support-requests/health", get(health_check))
        .route("/support-requests/:id", get(requests::get_request))
        .route("/support-requests/:id", put(requests::update_request))
        .route("/support-requests/:id", delete(requests::delete_request));

    Router::new()
        .nest("/api", api_routes)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Creates the CORS layer for the configured frontend origin.
///
/// Credentialed requests forbid a wildcard origin, so the layer names the
/// single allowed origin explicitly.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                origin = %config.allowed_origin,
                "Invalid CORS origin, falling back to http://localhost:5173"
            );
            HeaderValue::from_static("http://localhost:5173")
        });

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
