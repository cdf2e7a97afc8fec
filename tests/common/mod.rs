#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use shortlink::routes::{app_router, router};
use shortlink::state::AppState;
use shortlink::infrastructure::persistence::InMemoryUrlRepository;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state() -> AppState {
    create_test_state_with_limit(3)
}

pub fn create_test_state_with_limit(top_domains_limit: usize) -> AppState {
    AppState::new(
        Arc::new(InMemoryUrlRepository::new()),
        BASE_URL,
        top_domains_limit,
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Serves the full application service, trailing-slash normalization included.
pub fn create_app_server(state: AppState) -> TestServer {
    TestServer::new(Router::new().fallback_service(app_router(state))).unwrap()
}
