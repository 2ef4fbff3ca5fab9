//! Result storage.
//!
//! Results live for the lifetime of the process: no eviction, no persistence.

use async_trait::async_trait;
use remedyx_common::InvestigationResult;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// Storage for investigation results, keyed by generated identifier.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Store a result and return its new identifier.
    async fn insert(&self, result: InvestigationResult) -> String;

    async fn get(&self, id: &str) -> Option<InvestigationResult>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// HashMap-backed store. Identifiers are `result_<n>_<YYYYmmdd_HHMMSS>`
/// where `n` is the store size after insertion and the time comes from the
/// result's own timestamp.
#[derive(Default)]
pub struct InMemoryResultStore {
    results: RwLock<HashMap<String, InvestigationResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn insert(&self, result: InvestigationResult) -> String {
        let mut results = self.results.write().await;
        let id = format!(
            "result_{}_{}",
            results.len() + 1,
            result.timestamp.format("%Y%m%d_%H%M%S")
        );
        info!(result_id = %id, disease = %result.disease_name, "stored investigation result");
        results.insert(id.clone(), result);
        id
    }

    async fn get(&self, id: &str) -> Option<InvestigationResult> {
        self.results.read().await.get(id).cloned()
    }

    async fn len(&self) -> usize {
        self.results.read().await.len()
    }
}
