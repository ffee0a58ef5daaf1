//! Product catalog transformations
//!
//! Pure functions behind the catalog viewer: the product model, category
//! indexing, the filter-sort engine, load lifecycle states and the parsing of
//! interactive controls. Nothing in here performs I/O.

pub mod categories;
pub mod controls;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod format;
pub mod product;
pub mod status;

pub use categories::{build_categories, display_label, ALL_CATEGORIES_LABEL};
pub use controls::{parse_command, update_criteria, ControlEvent, HELP_TEXT};
pub use criteria::{FilterCriteria, SortOrder, ALL_CATEGORIES};
pub use engine::{apply, matches_category, matches_search};
pub use error::FetchError;
pub use format::format_price;
pub use product::{Catalog, Product, ProductId, Rating};
pub use status::{
    settle, status_message, CatalogState, LoadStatus, EMPTY_MESSAGE, LOADING_MESSAGE,
};

#[cfg(test)]
pub(crate) fn test_product(id: u64, title: &str, price: f64, category: &str) -> Product {
    Product {
        id: ProductId::Number(id),
        title: title.to_string(),
        price,
        category: category.to_string(),
        image: format!("https://example.com/{id}.png"),
        description: None,
        rating: None,
    }
}
