use crate::prelude::{eprintln, print, println, *};
use serde::Serialize;
use storefront_core::catalog::{build_categories, status_message, LoadStatus, ALL_CATEGORIES};

use super::render::{format_category_options, format_status};
use super::store::CatalogStore;

#[derive(Debug, clap::Args, Clone)]
pub struct CategoriesOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Machine-readable category listing
#[derive(Debug, Serialize)]
pub struct CategoriesOutput {
    #[serde(flatten)]
    pub status: LoadStatus,
    pub categories: Vec<String>,
}

pub async fn run(options: CategoriesOptions, global: crate::Global) -> Result<()> {
    let source = super::http_source(&global);
    let mut store = CatalogStore::new();

    store.load(&source).await?;
    let output = categories_data(&store)?;

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
        return Ok(());
    }

    let (message, is_error) = status_message(&output.status);
    if let Some(line) = format_status(&message, is_error) {
        eprintln!("{line}");
    }

    if !output.categories.is_empty() {
        print!("{}", format_category_options(&output.categories, ALL_CATEGORIES));
    }

    Ok(())
}

/// Category set of a settled store; empty unless the catalog loaded with products
fn categories_data(store: &CatalogStore) -> Result<CategoriesOutput> {
    let status = store.status().ok_or_eyre("Catalog was never loaded")?;

    let categories = match (&status, store.catalog()) {
        (LoadStatus::Loaded, Some(catalog)) => build_categories(catalog),
        _ => Vec::new(),
    };

    Ok(CategoriesOutput { status, categories })
}
