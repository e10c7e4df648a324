//! Workshop landing page server for the Azure Container Apps demo.
//!
//! Serves exactly two routes: the static workshop welcome page at `/` and a
//! JSON health probe at `/health`. Everything else is axum's default 404,
//! and non-GET methods on the two routes get axum's default 405.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with both routes.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::index::page))
        .route("/health", get(routes::health::check))
        .layer(TraceLayer::new_for_http())
}
