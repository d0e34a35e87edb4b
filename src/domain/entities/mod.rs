//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted original URL to short URL association
//! - [`NewUrlMapping`] - Insert payload for a mapping not yet stored

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
