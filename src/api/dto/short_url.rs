//! Query parameters for lookup endpoints.

use serde::Deserialize;

/// `?shortUrl=...` query used by `/original` and `/redirect`.
#[derive(Debug, Deserialize)]
pub struct ShortUrlQuery {
    #[serde(rename = "shortUrl")]
    pub short_url: String,
}
