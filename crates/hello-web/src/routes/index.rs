//! Greeting page endpoint.

use axum::response::Html;

pub const GREETING: &str =
    "<h1>Hello, World!</h1><p>Welcome to my Azure App Service application!</p>";

/// GET / — returns the static greeting.
pub async fn page() -> Html<&'static str> {
    Html(GREETING)
}
