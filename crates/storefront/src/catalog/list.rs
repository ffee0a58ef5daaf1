use crate::prelude::{println, *};
use serde::Serialize;
use storefront_core::catalog::{FilterCriteria, LoadStatus, Product, SortOrder, ALL_CATEGORIES};

use super::controller::Controller;
use super::render::present;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Only show products whose title contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only show products in this category (exact match, `all` for every category)
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,

    /// Price ordering: none, low-high or high-low
    #[arg(short = 'o', long, default_value = "none")]
    pub sort: SortOrder,

    /// Number of product cards per row
    #[arg(long, env = "STOREFRONT_COLUMNS", default_value = super::DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search.clone(), self.category.clone(), self.sort)
    }
}

/// Machine-readable result of a one-shot listing
#[derive(Debug, Serialize)]
pub struct ListOutput {
    #[serde(flatten)]
    pub status: LoadStatus,
    pub criteria: FilterCriteria,
    pub categories: Vec<String>,
    pub products: Vec<Product>,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let source = super::http_source(&global);
    let mut controller = Controller::with_criteria(options.criteria());

    let frames = controller.start(&source).await?;

    if options.json {
        let output = list_output(&controller)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
        return Ok(());
    }

    let render_options = super::render_options(options.columns, &global);
    for frame in &frames {
        present(frame, &render_options);
    }

    Ok(())
}

fn list_output(controller: &Controller) -> Result<ListOutput> {
    let status = controller
        .store()
        .status()
        .ok_or_eyre("Catalog was never loaded")?;

    Ok(ListOutput {
        status,
        criteria: controller.criteria().clone(),
        categories: controller.categories().to_vec(),
        products: controller.visible_products().unwrap_or_default(),
    })
}
