//! Catalog load lifecycle
//!
//! `Idle -> Loading -> {Loaded | Empty | Failed}`. The three settled states
//! are terminal; nothing moves a store back to `Loading`.

use serde::Serialize;

use super::error::FetchError;
use super::product::{Catalog, Product};

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "Empty: No products found.";

/// Where a catalog store is in its lifecycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading,
    Loaded(Catalog),
    /// The fetch succeeded with zero products
    Empty,
    Failed(String),
}

/// Outcome reported once a load settles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum LoadStatus {
    Loaded,
    Empty,
    Error(String),
}

impl CatalogState {
    /// The settled outcome, or `None` while idle or loading
    pub fn status(&self) -> Option<LoadStatus> {
        match self {
            CatalogState::Idle | CatalogState::Loading => None,
            CatalogState::Loaded(_) => Some(LoadStatus::Loaded),
            CatalogState::Empty => Some(LoadStatus::Empty),
            CatalogState::Failed(message) => Some(LoadStatus::Error(message.clone())),
        }
    }

    /// The catalog, once a fetch has succeeded. An empty fetch yields an empty catalog.
    pub fn catalog(&self) -> Option<&Catalog> {
        static EMPTY: Catalog = Catalog::EMPTY;
        match self {
            CatalogState::Loaded(catalog) => Some(catalog),
            CatalogState::Empty => Some(&EMPTY),
            _ => None,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.status().is_some()
    }
}

/// Turn the result of a single fetch into the settled state
pub fn settle(result: Result<Vec<Product>, FetchError>) -> CatalogState {
    match result {
        Ok(products) if products.is_empty() => CatalogState::Empty,
        Ok(products) => CatalogState::Loaded(Catalog::new(products)),
        Err(err) => CatalogState::Failed(err.to_string()),
    }
}

/// Status line text and error flag for a settled load.
///
/// A successful load clears the status line (empty message).
pub fn status_message(status: &LoadStatus) -> (String, bool) {
    match status {
        LoadStatus::Loaded => (String::new(), false),
        LoadStatus::Empty => (EMPTY_MESSAGE.to_string(), true),
        LoadStatus::Error(message) => (format!("Error: {message}"), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_product;

    #[test]
    fn test_settle_non_empty_is_loaded() {
        let state = settle(Ok(vec![test_product(1, "Red Mug", 5.0, "home")]));

        assert_eq!(state.status(), Some(LoadStatus::Loaded));
        assert_eq!(state.catalog().map(Catalog::len), Some(1));
    }

    #[test]
    fn test_settle_empty_is_empty() {
        let state = settle(Ok(vec![]));

        assert_eq!(state, CatalogState::Empty);
        assert_eq!(state.status(), Some(LoadStatus::Empty));
        assert!(state.catalog().is_some_and(Catalog::is_empty));
    }

    #[test]
    fn test_settle_error_keeps_message() {
        let state = settle(Err(FetchError::Transport("timeout".into())));

        assert_eq!(state.status(), Some(LoadStatus::Error("timeout".into())));
        assert!(state.catalog().is_none());
    }

    #[test]
    fn test_unsettled_states() {
        assert_eq!(CatalogState::default(), CatalogState::Idle);
        assert!(!CatalogState::Idle.is_settled());
        assert!(!CatalogState::Loading.is_settled());
        assert!(CatalogState::Empty.is_settled());
    }

    #[test]
    fn test_status_message() {
        assert_eq!(status_message(&LoadStatus::Loaded), (String::new(), false));
        assert_eq!(
            status_message(&LoadStatus::Empty),
            ("Empty: No products found.".to_string(), true)
        );
        assert_eq!(
            status_message(&LoadStatus::Error("timeout".into())),
            ("Error: timeout".to_string(), true)
        );
    }

    #[test]
    fn test_load_status_json() {
        let json = serde_json::to_string(&LoadStatus::Error("timeout".into())).unwrap();
        assert_eq!(json, r#"{"status":"error","message":"timeout"}"#);
    }
}
