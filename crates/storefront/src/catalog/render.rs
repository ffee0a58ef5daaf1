use crate::prelude::{eprintln, print, println, *};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use storefront_core::catalog::{display_label, format_price, Product};

use super::controller::Frame;

pub const NO_RESULTS_MESSAGE: &str = "No products match your criteria.";

const TITLE_WIDTH: usize = 32;

/// How frames are turned into terminal output
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub columns: usize,
    pub currency: String,
}

/// Greedy word wrap; words longer than `width` stay on their own line
fn wrap_words(text: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

fn format_card(product: &Product, currency: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}",
        wrap_words(&product.title, TITLE_WIDTH),
        product.category,
        format_price(product.price, currency),
        product.image
    )
}

/// Render the product grid, one card per product and `columns` cards per row.
///
/// An empty list renders the no-results placeholder instead.
pub fn format_product_grid(products: &[Product], columns: usize, currency: &str) -> String {
    if products.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE.yellow());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    for chunk in products.chunks(columns.max(1)) {
        let cells = chunk
            .iter()
            .map(|product| Cell::new(&format_card(product, currency)))
            .collect();
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

/// Render the category selector, marking the selected value
pub fn format_category_options(categories: &[String], selected: &str) -> String {
    let mut table = new_table();

    for category in categories {
        let marker = if category == selected { "*" } else { " " };
        table.add_row(prettytable::row![marker, display_label(category), category]);
    }

    table.to_string()
}

/// Render the status line. An empty message clears it and renders nothing.
pub fn format_status(message: &str, is_error: bool) -> Option<String> {
    if message.is_empty() {
        return None;
    }

    if is_error {
        Some(message.red().bold().to_string())
    } else {
        Some(message.bright_black().to_string())
    }
}

/// Write a frame to the terminal: status lines to stderr, everything else to stdout
pub fn present(frame: &Frame, options: &RenderOptions) {
    match frame {
        Frame::Status { message, is_error } => {
            if let Some(line) = format_status(message, *is_error) {
                eprintln!("{line}");
            }
        }
        Frame::CategoryOptions {
            categories,
            selected,
        } => print!("{}", format_category_options(categories, selected)),
        Frame::Grid(products) => {
            print!(
                "{}",
                format_product_grid(products, options.columns, &options.currency)
            )
        }
        Frame::Text(text) => println!("{text}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::store::tests::{create_test_product, scenario_products};

    #[test]
    fn test_format_product_grid_empty_shows_placeholder() {
        let output = format_product_grid(&[], 3, "$");

        assert!(output.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_format_product_grid_shows_card_fields() {
        let output = format_product_grid(&scenario_products(), 2, "$");

        for title in ["Red Shirt", "Blue Shirt", "Red Mug"] {
            assert!(output.contains(title), "missing {title}");
        }
        assert!(output.contains("clothing"));
        assert!(output.contains("home"));
        assert!(output.contains("$20"));
        assert!(output.contains("$10"));
        assert!(output.contains("$5"));
        assert!(output.contains("https://example.com/3.png"));
        assert!(!output.contains(NO_RESULTS_MESSAGE));
    }

    #[test]
    fn test_format_product_grid_rows_follow_columns() {
        let products = scenario_products();

        let one_column = format_product_grid(&products, 1, "$");
        let three_columns = format_product_grid(&products, 3, "$");

        assert!(one_column.lines().count() > three_columns.lines().count());
    }

    #[test]
    fn test_format_product_grid_zero_columns_does_not_panic() {
        let output = format_product_grid(&scenario_products(), 0, "$");

        assert!(output.contains("Red Mug"));
    }

    #[test]
    fn test_format_product_grid_currency() {
        let products = vec![create_test_product(1, "Lamp", 109.95, "home")];

        assert!(format_product_grid(&products, 1, "€").contains("€109.95"));
    }

    #[test]
    fn test_wrap_words() {
        assert_eq!(wrap_words("Red Shirt", 32), "Red Shirt");
        assert_eq!(wrap_words("one two three", 7), "one two\nthree");
        assert_eq!(wrap_words("supercalifragilistic x", 5), "supercalifragilistic\nx");
        assert_eq!(wrap_words("", 5), "");
    }

    #[test]
    fn test_format_category_options() {
        let categories = vec![
            "all".to_string(),
            "men's clothing".to_string(),
            "jewelery".to_string(),
        ];

        let output = format_category_options(&categories, "jewelery");

        assert!(output.contains("All categories"));
        assert!(output.contains("Men's clothing"));
        assert!(output.contains("men's clothing"));
        assert!(output.contains("Jewelery"));
        assert_eq!(output.lines().count(), 3);
        assert!(output
            .lines()
            .any(|line| line.contains('*') && line.contains("Jewelery")));
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status("", false), None);
        assert_eq!(format_status("", true), None);
        assert!(format_status("Loading...", false)
            .unwrap()
            .contains("Loading..."));
        assert!(format_status("Error: timeout", true)
            .unwrap()
            .contains("Error: timeout"));
    }
}
