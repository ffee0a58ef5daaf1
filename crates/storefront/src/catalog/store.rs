use crate::prelude::*;
use log::{info, warn};
use storefront_core::catalog::{settle, Catalog, CatalogState, LoadStatus};

use super::source::ProductSource;

/// Owns the catalog for a session and its load lifecycle.
///
/// The store is written once, by [`CatalogStore::load`], and only read afterwards.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Option<LoadStatus> {
        self.state.status()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.state.catalog()
    }

    /// Fetch the catalog from `source`, a single attempt.
    ///
    /// Once settled, further calls return the settled status without fetching again.
    pub async fn load<S: ProductSource>(&mut self, source: &S) -> Result<LoadStatus> {
        if self.state.is_settled() {
            warn!("Catalog already settled, skipping fetch");
            return self.state.status().ok_or_eyre("Settled catalog has no status");
        }

        self.state = CatalogState::Loading;
        let result = source.fetch_products().await;

        match &result {
            Ok(products) => info!("Fetched {} products", products.len()),
            Err(err) => warn!("Product fetch failed: {err}"),
        }

        self.state = settle(result);
        self.state
            .status()
            .ok_or_eyre("Catalog load finished without settling")
    }
}
