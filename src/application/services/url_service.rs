//! Short URL creation and resolution service.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::NewUrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, SHORT_URL_NOT_FOUND};
use crate::utils::alias::AliasGenerator;

/// Service for creating and resolving short URLs.
///
/// The only entry point to the store for mappings. Holds no state between
/// calls beyond its collaborators.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    alias_generator: AliasGenerator,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, alias_generator: AliasGenerator) -> Self {
        Self {
            repository,
            alias_generator,
        }
    }

    /// Returns the short URL for `original_url`, creating the mapping if needed.
    ///
    /// Repeated calls with the same input return the same short URL and never
    /// store a second mapping. The original URL is stored as given.
    ///
    /// # Concurrent creation
    ///
    /// Two callers may both miss the lookup and both insert. The store rejects
    /// the second insert with [`AppError::Conflict`]; the loser then re-reads
    /// the winner's mapping. Since aliases are deterministic both return the
    /// same short URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn ensure_short_url(&self, original_url: &str) -> Result<String, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(original_url).await? {
            debug!("Existing mapping for {}", original_url);
            return Ok(existing.short_url);
        }

        let short_url = self.alias_generator.short_url(original_url);
        let new_mapping = NewUrlMapping::new(original_url, short_url);

        match self.repository.insert(new_mapping).await {
            Ok(mapping) => {
                info!(
                    id = mapping.id,
                    short_url = %mapping.short_url,
                    "Created short URL"
                );
                Ok(mapping.short_url)
            }
            Err(conflict @ AppError::Conflict { .. }) => {
                warn!("Concurrent creation for {}, re-reading", original_url);
                self.repository
                    .find_by_original_url(original_url)
                    .await?
                    .map(|mapping| mapping.short_url)
                    .ok_or(conflict)
            }
            Err(e) => Err(e),
        }
    }

    /// Resolves a short URL back to its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with message `"Short URL not found."` if
    /// no mapping exists.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve_original_url(&self, short_url: &str) -> Result<String, AppError> {
        self.repository
            .find_by_short_url(short_url)
            .await?
            .map(|mapping| mapping.original_url)
            .ok_or_else(|| {
                debug!("No mapping for {}", short_url);
                AppError::not_found(SHORT_URL_NOT_FOUND, json!({ "short_url": short_url }))
            })
    }

    /// Resolves the redirect target for a short URL.
    ///
    /// Same lookup as [`Self::resolve_original_url`]; the caller is expected to
    /// answer with a permanent redirect to the returned URL.
    pub async fn redirect_target(&self, short_url: &str) -> Result<String, AppError> {
        self.resolve_original_url(short_url).await
    }
}
