//! Process-local timestamp store

use super::store::RateLimitStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;

/// In-memory store keyed by client identifier
///
/// Not shared across processes and emptied on restart. Keys are only removed
/// by [`RateLimitStore::sweep`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Vec<u64>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracked clients
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Vec<u64>> {
        Ok(self
            .entries
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn prune(&self, key: &str, cutoff_ms: u64) -> Result<()> {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.retain(|&t| t > cutoff_ms);
        }
        Ok(())
    }

    async fn append(&self, key: &str, timestamp_ms: u64, _window: Duration) -> Result<()> {
        // Avoid String allocation if key already exists
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.push(timestamp_ms);
            return Ok(());
        }
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(timestamp_ms);
        Ok(())
    }

    async fn sweep(&self, cutoff_ms: u64) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|_, timestamps| {
            timestamps.retain(|&t| t > cutoff_ms);
            !timestamps.is_empty()
        });
        Ok(before - self.entries.len())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
