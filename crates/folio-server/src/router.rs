//! Router assembly for the folio HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Project management
        .route(
            "/projects",
            get(handlers::projects::list_projects)
                .post(handlers::projects::create_project),
        )
        .route(
            "/projects/{id}",
            delete(handlers::projects::delete_project),
        )
        // Maintenance
        .route(
            "/maintenance/reconcile",
            post(handlers::maintenance::reconcile),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
