//! Caching layer for feed snapshots.
//!
//! The feeds regenerate every few seconds and every page load needs the
//! same joined view, so the classified snapshot is cached whole. A short
//! TTL keeps the legend fresh while concurrent page loads share one
//! upstream fetch pair.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::gbfs::{GbfsClient, SnapshotError};
use crate::stations::Snapshot;

/// Configuration for the snapshot cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for the cached snapshot.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30),
        }
    }
}

/// GBFS client with snapshot caching.
///
/// Wraps a [`GbfsClient`] and caches the joined, classified snapshot.
/// There is only ever one live snapshot, so the cache is keyed by unit.
pub struct CachedGbfsClient {
    client: GbfsClient,
    snapshots: MokaCache<(), Arc<Snapshot>>,
}

impl CachedGbfsClient {
    /// Create a new cached client.
    pub fn new(client: GbfsClient, config: &CacheConfig) -> Self {
        let snapshots = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { client, snapshots }
    }

    /// Get the current snapshot, fetching both feeds on a cache miss.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, SnapshotError> {
        if let Some(cached) = self.snapshots.get(&()).await {
            return Ok(cached);
        }

        let snapshot = Arc::new(self.client.fetch_snapshot().await?);
        self.snapshots.insert((), snapshot.clone()).await;

        Ok(snapshot)
    }

    /// Access the underlying client for operations that bypass the cache.
    pub fn client(&self) -> &GbfsClient {
        &self.client
    }

    /// Drop the cached snapshot so the next request refetches.
    pub fn invalidate(&self) {
        self.snapshots.invalidate_all();
    }
}
