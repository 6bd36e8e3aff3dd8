//! API Routes
//!
//! Configures the Axum router for the caching proxy.

use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{proxy_handler, AppState};

/// Creates the proxy router.
///
/// Every method and path lands on the wildcard proxy handler; there are no
/// other endpoints, so arbitrary origin paths (including `/`) pass through
/// untouched.
///
/// # Middleware
/// - Tracing: logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .fallback(proxy_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
