//! Handler for the shorten endpoint.

use axum::extract::State;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Returns the short URL for the original URL sent as the request body.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// The body is the raw original URL (`text/plain`) and is stored exactly as
/// sent. Repeated requests with the same body return the same short URL.
///
/// # Response
///
/// `200 OK` with the short URL as `text/plain`:
///
/// ```text
/// https://myservicedomain.de/rGu2ae
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing or blank.
/// Returns 500 Internal Server Error on database errors.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<String, AppError> {
    if body.trim().is_empty() {
        return Err(AppError::bad_request(
            "Request body must contain the URL to shorten",
            json!({}),
        ));
    }

    state.url_service.ensure_short_url(&body).await
}
