use crate::prelude::*;
use clap::Parser;

mod catalog;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, search and sort a remote product catalog from the terminal"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Product API endpoint returning a JSON array of products
    #[clap(
        long,
        env = "STOREFRONT_ENDPOINT",
        global = true,
        default_value = catalog::source::DEFAULT_ENDPOINT
    )]
    endpoint: String,

    /// Currency prefix used when printing prices
    #[clap(long, env = "STOREFRONT_CURRENCY", global = true, default_value = "$")]
    currency: String,

    /// Whether to display additional information.
    #[clap(long, env = "STOREFRONT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Load the catalog once and print the filtered, sorted product grid
    List(crate::catalog::list::ListOptions),

    /// Print the categories found in the catalog
    Categories(crate::catalog::categories::CategoriesOptions),

    /// Interactive session: type search, category and sort commands to refine the grid
    Browse(crate::catalog::browse::BrowseOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::catalog::list::run(options, app.global).await,
        SubCommands::Categories(options) => {
            crate::catalog::categories::run(options, app.global).await
        }
        SubCommands::Browse(options) => crate::catalog::browse::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
