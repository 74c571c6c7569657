//! Command handlers. Every command performs exactly one sheet fetch.

use std::path::Path;

use anyhow::Context as _;
use sheetshop_catalog::{
    apply_filters, load_catalog, render_error_page, render_filtered, render_page,
    retain_known_category, HtmlGridRenderer, PageContext, SheetClient,
};
use sheetshop_core::{AppConfig, Catalog, ProductQuery};

async fn fetch_catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let client = SheetClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build sheet client")?;
    let catalog = load_catalog(&client, &config.sheet_csv_url).await?;
    Ok(catalog)
}

/// Renders the full storefront page for `catalog` filtered by `query`.
pub(crate) fn render_storefront(catalog: &Catalog, config: &AppConfig, query: &ProductQuery) -> String {
    let query = retain_known_category(query, &catalog.categories);
    let mut renderer = HtmlGridRenderer::new(config.image_base.as_str());
    let result_count = render_filtered(&mut renderer, &catalog.products, &query);
    render_page(&PageContext {
        title: &config.store_title,
        query: &query,
        categories: &catalog.categories,
        grid_html: renderer.html(),
        result_count,
    })
}

/// Fetches the sheet and writes the storefront page.
///
/// When the fetch fails the error page is written instead and the error is
/// returned, so the process exits non-zero.
///
/// # Errors
///
/// Returns an error if the sheet cannot be loaded or the output cannot be
/// written.
pub(crate) async fn run_render(
    config: &AppConfig,
    query: &ProductQuery,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    match fetch_catalog(config).await {
        Ok(catalog) => {
            let page = render_storefront(&catalog, config, query);
            write_output(output, &page)?;
            tracing::info!(
                products = catalog.products.len(),
                categories = catalog.categories.len(),
                "storefront rendered"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed; writing error page");
            write_output(output, &render_error_page(&config.store_title))?;
            Err(e)
        }
    }
}

/// Fetches the sheet and prints the filtered products as JSON.
///
/// # Errors
///
/// Returns an error if the sheet cannot be loaded.
pub(crate) async fn run_products(config: &AppConfig, query: &ProductQuery) -> anyhow::Result<()> {
    let catalog = fetch_catalog(config).await?;
    let query = retain_known_category(query, &catalog.categories);
    let products = apply_filters(&catalog.products, &query);
    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

/// Fetches the sheet and prints one category per line.
///
/// # Errors
///
/// Returns an error if the sheet cannot be loaded.
pub(crate) async fn run_categories(config: &AppConfig) -> anyhow::Result<()> {
    let catalog = fetch_catalog(config).await?;
    for category in &catalog.categories {
        println!("{category}");
    }
    Ok(())
}

fn write_output(output: Option<&Path>, page: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, page)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{page}");
            Ok(())
        }
    }
}
