use crate::prelude::eprintln;

pub mod browse;
pub mod categories;
pub mod controller;
pub mod list;
pub mod render;
pub mod source;
pub mod store;

use render::RenderOptions;
use source::HttpSource;

/// Default number of product cards per grid row
pub const DEFAULT_COLUMNS: &str = "2";

pub(crate) fn http_source(global: &crate::Global) -> HttpSource {
    let source = HttpSource::new(global.endpoint.clone());

    if global.verbose {
        eprintln!("Catalog endpoint: {}", source.endpoint());
    }

    source
}

pub(crate) fn render_options(columns: usize, global: &crate::Global) -> RenderOptions {
    RenderOptions {
        columns,
        currency: global.currency.clone(),
    }
}
