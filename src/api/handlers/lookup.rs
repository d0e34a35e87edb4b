//! Handler for original URL lookup.

use axum::extract::{Query, State};

use crate::api::dto::ShortUrlQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short URL.
///
/// # Endpoint
///
/// `GET /original?shortUrl={short_url}`
///
/// # Errors
///
/// Returns 400 Bad Request if `shortUrl` is missing.
/// Returns 404 Not Found with message `"Short URL not found."` if unknown.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortUrlQuery>,
) -> Result<String, AppError> {
    state
        .url_service
        .resolve_original_url(&query.short_url)
        .await
}
