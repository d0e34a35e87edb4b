//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

type UrlRow = (i64, String, String);

/// PostgreSQL repository for URL mappings.
///
/// Queries are bound parameters checked at runtime, so the crate builds
/// without a live database.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn into_mapping((id, original_url, short_url): UrlRow) -> UrlMapping {
    UrlMapping::new(id, original_url, short_url)
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError> {
        // md5 predicate lets the planner use url_original_url_key
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url
            FROM url
            WHERE md5(original_url) = md5($1) AND original_url = $1
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(into_mapping))
    }

    async fn find_by_short_url(&self, short_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, short_url
            FROM url
            WHERE short_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(into_mapping))
    }

    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO url (original_url, short_url)
            VALUES ($1, $2)
            RETURNING id, original_url, short_url
            "#,
        )
        .bind(&new_mapping.original_url)
        .bind(&new_mapping.short_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(into_mapping(row))
    }
}
