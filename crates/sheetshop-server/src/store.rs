//! Shared catalog snapshot.

use std::sync::Arc;

use sheetshop_catalog::{load_catalog, CatalogError, SheetClient};
use sheetshop_core::Catalog;
use tokio::sync::RwLock;

/// Holds the most recently loaded [`Catalog`], if any.
///
/// Readers clone the inner `Arc` and release the lock immediately; a refresh
/// replaces the whole snapshot under a short write lock.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<Option<Arc<Catalog>>>>,
}

impl CatalogStore {
    #[cfg(test)]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(Arc::new(catalog)))),
        }
    }

    /// Current snapshot, or `None` until the first successful load.
    pub async fn snapshot(&self) -> Option<Arc<Catalog>> {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, catalog: Catalog) {
        *self.inner.write().await = Some(Arc::new(catalog));
    }

    /// Runs one load cycle and swaps in the result.
    ///
    /// On failure the previous snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns the [`CatalogError`] from [`load_catalog`].
    pub async fn refresh(&self, client: &SheetClient, sheet_url: &str) -> Result<(), CatalogError> {
        let catalog = load_catalog(client, sheet_url).await?;
        let products = catalog.products.len();
        self.replace(catalog).await;
        tracing::info!(products, "catalog snapshot replaced");
        Ok(())
    }
}
