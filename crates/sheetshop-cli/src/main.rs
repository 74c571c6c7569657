mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sheetshop_core::{ProductQuery, SortOrder};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sheetshop-cli")]
#[command(about = "Render and inspect a spreadsheet-backed storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the sheet once and write the storefront page
    Render {
        /// Write the page here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Print filtered products as JSON
    Products {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Print the category list, one per line
    Categories,
}

/// The storefront controls as command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
struct QueryArgs {
    /// Free-text search over name, category and ID
    #[arg(long)]
    q: Option<String>,
    /// Only show this category
    #[arg(long)]
    category: Option<String>,
    /// name-asc, price-asc or price-desc
    #[arg(long)]
    sort: Option<String>,
}

impl From<QueryArgs> for ProductQuery {
    fn from(args: QueryArgs) -> Self {
        Self {
            q: args.q,
            category: args.category,
            sort: args.sort.as_deref().map_or(SortOrder::None, SortOrder::parse),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("sheetshop-cli: pass a command (render, products, categories); see --help");
        return Ok(());
    };

    let config = sheetshop_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match command {
        Commands::Render { output, query } => {
            commands::run_render(&config, &query.into(), output.as_deref()).await
        }
        Commands::Products { query } => commands::run_products(&config, &query.into()).await,
        Commands::Categories => commands::run_categories(&config).await,
    }
}

#[cfg(test)]
mod tests;
