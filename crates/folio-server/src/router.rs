//! Folio Router
//!
//! HTTP router configuration with middleware stack. Static routes are
//! matched before the `/:section` capture, so `/all`, `/sections` and
//! `/healthz` never resolve to document sections.
//!
//! @version 0.1.0
//! @author AutomataNexus Development Team

use crate::handlers;
use crate::middleware;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// =============================================================================
// Router
// =============================================================================

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::health_check))
        .route("/all", get(handlers::get_all))
        .route("/sections", get(handlers::list_sections))
        .route("/:section", get(handlers::get_section))
        .route("/:section/:id", get(handlers::get_item))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http());

    if state.config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
        .layer(axum::middleware::from_fn(middleware::request_id))
        .with_state(state)
}

// =============================================================================
// Tests
// =============================================================================
