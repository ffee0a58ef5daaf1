//! Filter-Sort Engine
//!
//! Derives the list of products to display from the catalog and the current
//! [`FilterCriteria`]. Stages always run in the same order: search, then
//! category, then sort. The catalog itself is never touched.

use super::criteria::{FilterCriteria, SortOrder, ALL_CATEGORIES};
use super::product::{Catalog, Product};

/// Case-insensitive substring match of `term` against the product title.
///
/// An empty term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    term.is_empty() || product.title.to_lowercase().contains(&term.to_lowercase())
}

/// Exact, case-sensitive category match. The `"all"` sentinel matches everything.
pub fn matches_category(product: &Product, category: &str) -> bool {
    category == ALL_CATEGORIES || product.category == category
}

/// Apply search, category and sort to the catalog, returning a new sequence
pub fn apply(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<Product> {
    let mut filtered: Vec<Product> = catalog
        .iter()
        .filter(|p| matches_search(p, &criteria.search_term))
        .filter(|p| matches_category(p, &criteria.category))
        .cloned()
        .collect();

    // `sort_by` is stable, so equal prices keep their catalog order.
    match criteria.sort_order {
        SortOrder::None => {}
        SortOrder::Ascending => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::Descending => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    filtered
}
