//! Data Transfer Objects for API requests.

pub mod short_url;

pub use short_url::ShortUrlQuery;
