//! Hello-world server for the Azure App Service demo.
//!
//! The App Service sibling of `workshop-web`: the same two routes, with a
//! one-line HTML greeting instead of the workshop landing page. Unmatched
//! paths and methods fall through to axum's default 404/405 handling.

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
