//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedGbfsClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached GBFS client
    pub gbfs: Arc<CachedGbfsClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(gbfs: CachedGbfsClient) -> Self {
        Self {
            gbfs: Arc::new(gbfs),
        }
    }
}
