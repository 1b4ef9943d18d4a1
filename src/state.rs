//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::persistence::PgLinkRepository;

/// Application state shared across request handlers.
///
/// All durable shared state lives in PostgreSQL; the state itself only holds
/// handles, so handlers run in full parallel with no cross-request locks.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub stats_service: Arc<StatsService<PgLinkRepository>>,
    /// Pool handle kept for the health check ping.
    pub db: Arc<PgPool>,
    /// Public base URL used to build `short_url` values, e.g. `https://s.example.com`.
    pub base_url: String,
}

impl AppState {
    /// Wires repositories and services over a connection pool.
    pub fn new(pool: Arc<PgPool>, base_url: String) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            stats_service: Arc::new(StatsService::new(link_repository)),
            db: pool,
            base_url,
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
