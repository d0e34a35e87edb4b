//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Minimal store capability needed by [`crate::application::services::UrlService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a mapping by exact match on the original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_original_url(&self, original_url: &str)
    -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by exact match on the full short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Persists a new mapping and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a mapping for the same original URL
    /// already exists.
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;
}
