#![allow(dead_code)]

use axum::Router;
use std::sync::Arc;
use url_directory::api::routes::public_routes;
use url_directory::application::services::UrlService;
use url_directory::infrastructure::persistence::InMemoryUrlRepository;
use url_directory::state::AppState;
use url_directory::utils::alias::AliasGenerator;

pub const ORIGINAL_URL: &str = "https://www.google.com";
pub const SHORT_URL: &str = "https://myservicedomain.de/rGu2ae";

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let url_service = UrlService::new(repository.clone(), AliasGenerator::default());

    (AppState::new(Arc::new(url_service)), repository)
}

pub fn create_test_app() -> (Router, Arc<InMemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    (public_routes().with_state(state), repository)
}

pub async fn create_test_mapping(state: &AppState, original_url: &str) -> String {
    state
        .url_service
        .ensure_short_url(original_url)
        .await
        .unwrap()
}
