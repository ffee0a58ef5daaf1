use crate::prelude::*;
use log::debug;
use storefront_core::catalog::{
    apply, build_categories, status_message, update_criteria, ControlEvent, FilterCriteria,
    LoadStatus, Product, HELP_TEXT, LOADING_MESSAGE,
};

use super::source::ProductSource;
use super::store::CatalogStore;

/// One rendering instruction for the terminal
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Status { message: String, is_error: bool },
    CategoryOptions { categories: Vec<String>, selected: String },
    Grid(Vec<Product>),
    Text(String),
}

impl Frame {
    fn status(message: impl Into<String>, is_error: bool) -> Self {
        Frame::Status {
            message: message.into(),
            is_error,
        }
    }
}

/// Wires user input to the filter-sort engine and the renderer
#[derive(Debug, Default)]
pub struct Controller {
    store: CatalogStore,
    criteria: FilterCriteria,
    categories: Vec<String>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Page load: show the loading status, fetch once, then render what came back
    pub async fn start<S: ProductSource>(&mut self, source: &S) -> Result<Vec<Frame>> {
        let mut frames = vec![Frame::status(LOADING_MESSAGE, false)];

        let status = self.store.load(source).await?;
        let (message, is_error) = status_message(&status);

        match status {
            LoadStatus::Loaded => {
                if let Some(catalog) = self.store.catalog() {
                    self.categories = build_categories(catalog);
                }
                frames.push(self.category_frame());
                frames.extend(self.grid_frame());
                frames.push(Frame::status(message, is_error));
            }
            LoadStatus::Empty => {
                frames.push(Frame::status(message, is_error));
                frames.push(Frame::Grid(Vec::new()));
            }
            LoadStatus::Error(_) => frames.push(Frame::status(message, is_error)),
        }

        Ok(frames)
    }

    /// React to one user interaction
    pub fn handle(&mut self, event: &ControlEvent) -> Vec<Frame> {
        if let Some(criteria) = update_criteria(&self.criteria, event) {
            debug!("Criteria changed to {criteria:?}");
            self.criteria = criteria;
            return self.grid_frame().into_iter().collect();
        }

        match event {
            ControlEvent::ShowCategories if !self.categories.is_empty() => {
                vec![self.category_frame()]
            }
            ControlEvent::Help => vec![Frame::Text(HELP_TEXT.to_string())],
            _ => Vec::new(),
        }
    }

    /// Products visible under the current criteria, once a catalog is loaded
    pub fn visible_products(&self) -> Option<Vec<Product>> {
        self.store
            .catalog()
            .map(|catalog| apply(catalog, &self.criteria))
    }

    fn grid_frame(&self) -> Option<Frame> {
        self.visible_products().map(Frame::Grid)
    }

    fn category_frame(&self) -> Frame {
        Frame::CategoryOptions {
            categories: self.categories.clone(),
            selected: self.criteria.category.clone(),
        }
    }
}
