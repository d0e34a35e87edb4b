//! PostgreSQL repository tests.
//!
//! Require a reachable database in `DATABASE_URL`; run with
//! `cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use url_directory::AppError;
use url_directory::application::services::UrlService;
use url_directory::domain::entities::NewUrlMapping;
use url_directory::domain::repositories::UrlRepository;
use url_directory::infrastructure::persistence::PgUrlRepository;
use url_directory::utils::alias::AliasGenerator;

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_insert_mapping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let result = repo
        .insert(NewUrlMapping::new(
            "https://www.google.com",
            "https://myservicedomain.de/rGu2ae",
        ))
        .await;

    let mapping = result.unwrap();
    assert!(mapping.id > 0);
    assert_eq!(mapping.original_url, "https://www.google.com");
    assert_eq!(mapping.short_url, "https://myservicedomain.de/rGu2ae");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_original_url(pool: PgPool) {
    sqlx::query("INSERT INTO url (original_url, short_url) VALUES ($1, $2)")
        .bind("https://unique-url.com")
        .bind("https://myservicedomain.de/xyz789")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgUrlRepository::new(Arc::new(pool));
    let result = repo.find_by_original_url("https://unique-url.com").await;

    let mapping = result.unwrap().unwrap();
    assert_eq!(mapping.short_url, "https://myservicedomain.de/xyz789");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_by_short_url(pool: PgPool) {
    sqlx::query("INSERT INTO url (original_url, short_url) VALUES ($1, $2)")
        .bind("https://example.com")
        .bind("https://myservicedomain.de/abc123")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgUrlRepository::new(Arc::new(pool));
    let result = repo
        .find_by_short_url("https://myservicedomain.de/abc123")
        .await;

    let mapping = result.unwrap().unwrap();
    assert_eq!(mapping.original_url, "https://example.com");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_not_found(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    assert!(repo.find_by_original_url("https://nope").await.unwrap().is_none());
    assert!(repo.find_by_short_url("nope").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_duplicate_original_url_is_conflict(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(NewUrlMapping::new("https://dup.com", "https://s/aaaaaa"))
        .await
        .unwrap();
    let result = repo
        .insert(NewUrlMapping::new("https://dup.com", "https://s/aaaaaa"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict { .. })));
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_very_long_original_url(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let long_url = format!("https://example.com/{}", "a".repeat(20_000));

    repo.insert(NewUrlMapping::new(long_url.clone(), "https://s/long00"))
        .await
        .unwrap();

    let found = repo.find_by_original_url(&long_url).await.unwrap();
    assert_eq!(found.unwrap().short_url, "https://s/long00");
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_service_round_trip(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    let service = UrlService::new(repo, AliasGenerator::default());

    let first = service
        .ensure_short_url("https://www.google.com")
        .await
        .unwrap();
    let second = service
        .ensure_short_url("https://www.google.com")
        .await
        .unwrap();

    assert_eq!(first, "https://myservicedomain.de/rGu2ae");
    assert_eq!(first, second);
    assert_eq!(
        service.resolve_original_url(&first).await.unwrap(),
        "https://www.google.com"
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
