//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local store with the same uniqueness rule as the `url` table:
/// one mapping per original URL.
///
/// Used by tests and local experiments; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    mappings: RwLock<Vec<UrlMapping>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub async fn len(&self) -> usize {
        self.mappings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.mappings.read().await.is_empty()
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        let mappings = self.mappings.read().await;
        Ok(mappings
            .iter()
            .find(|m| m.original_url == original_url)
            .cloned())
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mappings = self.mappings.read().await;
        Ok(mappings.iter().find(|m| m.short_url == short_url).cloned())
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut mappings = self.mappings.write().await;

        if mappings
            .iter()
            .any(|m| m.original_url == new_mapping.original_url)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "url_original_url_key" }),
            ));
        }

        let id = mappings.last().map_or(1, |m| m.id + 1);
        let mapping = new_mapping.into_mapping(id);
        mappings.push(mapping.clone());

        Ok(mapping)
    }
}
