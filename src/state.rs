//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::utils::code_generator::DigestCodeGenerator;

pub type AppLinkService = LinkService<InMemoryUrlRepository, DigestCodeGenerator>;
pub type AppStatsService = StatsService<InMemoryUrlRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub stats_service: Arc<AppStatsService>,
    pub top_domains_limit: usize,
}

impl AppState {
    /// Wires both services to one shared repository.
    pub fn new(
        repository: Arc<InMemoryUrlRepository>,
        base_url: impl Into<String>,
        top_domains_limit: usize,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            repository.clone(),
            DigestCodeGenerator,
            base_url,
        ));
        let stats_service = Arc::new(StatsService::new(repository));

        Self {
            link_service,
            stats_service,
            top_domains_limit,
        }
    }
}
