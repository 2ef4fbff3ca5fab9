//! Shared application state for the web server.

use std::sync::Arc;

use remedyx_config::Config;
use remedyx_research::{Catalog, InMemoryResultStore, Investigator, ResultStore, SeededEfficacy};

/// Shared state injected into every Axum handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub investigator: Investigator,
    pub store: Arc<dyn ResultStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, investigator: Investigator, store: Arc<dyn ResultStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            investigator,
            store,
        }
    }

    /// Built-in catalog, an empty in-memory store and an efficacy source
    /// seeded from `[investigator] seed` when set.
    pub fn from_config(config: &Config) -> Self {
        let efficacy = Arc::new(SeededEfficacy::new(config.investigator.seed));
        Self::new(
            Catalog::builtin(),
            Investigator::new(efficacy),
            Arc::new(InMemoryResultStore::new()),
        )
    }
}

pub type SharedState = Arc<AppState>;
