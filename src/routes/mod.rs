//! HTTP routes.
//!
//! The only route is the health check. Unknown paths and unsupported methods
//! fall through to JSON error responses so callers always get a parseable body.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{
    http::header::{HeaderValue, CACHE_CONTROL},
    middleware,
    routing::get,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::error::AppError;
use crate::middleware::request_id_layer;

/// Methods served by the health route (`get` also answers HEAD).
const HEALTH_ALLOW: &str = "GET,HEAD";

/// Creates the Axum router with the health route and fallbacks.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(
            HEALTH_PATH,
            get(health::health).fallback(health_method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        .fallback(not_found)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

async fn not_found() -> AppError {
    AppError::NotFound
}

async fn health_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed {
        allow: HEALTH_ALLOW,
    }
}
