//! Handler for short URL redirect.

use axum::{
    extract::{Query, State},
    response::Redirect,
};

use crate::api::dto::ShortUrlQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short URL to its original URL.
///
/// # Endpoint
///
/// `GET /redirect?shortUrl={short_url}`
///
/// Responds with `308 Permanent Redirect` and a `Location` header equal to
/// the stored original URL. Mappings never change, so the redirect is safe to
/// cache permanently.
///
/// # Errors
///
/// Returns 400 Bad Request if `shortUrl` is missing.
/// Returns 404 Not Found if the short URL is unknown.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortUrlQuery>,
) -> Result<Redirect, AppError> {
    let target = state.url_service.redirect_target(&query.short_url).await?;

    Ok(Redirect::permanent(&target))
}
