//! HTTP API layer.
//!
//! Translates HTTP requests into [`crate::application::services::UrlService`]
//! calls and formats responses.
//!
//! - [`dto`] - Request parameter types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
