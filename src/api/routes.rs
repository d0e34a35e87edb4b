//! API route configuration.

use crate::api::handlers::{lookup_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /shorten`                  - Create or fetch the short URL for a body URL
/// - `GET  /original?shortUrl=...`    - Resolve a short URL to its original URL
/// - `GET  /redirect?shortUrl=...`    - 308 redirect to the original URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/original", get(lookup_handler))
        .route("/redirect", get(redirect_handler))
}
