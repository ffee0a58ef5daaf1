use super::criteria::ALL_CATEGORIES;
use super::product::Catalog;

/// Display text used for the `"all"` sentinel
pub const ALL_CATEGORIES_LABEL: &str = "All categories";

/// Build the category selector values: `"all"` followed by each distinct
/// category in first-seen catalog order.
pub fn build_categories(catalog: &Catalog) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];

    for product in catalog {
        if !categories.iter().any(|c| *c == product.category) {
            categories.push(product.category.clone());
        }
    }

    categories
}

/// Human-friendly label for a category value.
///
/// Only the first character is upper-cased; the raw value is what filters compare against.
pub fn display_label(category: &str) -> String {
    if category == ALL_CATEGORIES {
        return ALL_CATEGORIES_LABEL.to_string();
    }

    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
