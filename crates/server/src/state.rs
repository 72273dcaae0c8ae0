use std::sync::Arc;

use catalog::CatalogStore;

/// Shared application state
///
/// The store is loaded once at startup and never written afterwards, so
/// handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
}

impl AppState {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
