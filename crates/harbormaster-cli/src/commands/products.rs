//! Products command handler for listing refrigerated products.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use harbormaster_cli::output::{format_products_text, render_json, OutputFormat};
use harbormaster_lib::ProductCatalog;

use crate::GlobalOptions;

/// Environment variable naming an alternative product catalog CSV.
pub const PRODUCT_DATA_ENV: &str = "HARBORMASTER_PRODUCT_DATA";

/// Handle the products subcommand.
pub fn handle_list_products(options: &GlobalOptions) -> Result<()> {
    let catalog = load_product_catalog(options.products.as_deref())?;
    let products = catalog.products_sorted();

    match options.format {
        OutputFormat::Text => print!("{}", format_products_text(&products)),
        OutputFormat::Json => render_json(&products)?,
    }
    Ok(())
}

/// Load the product catalog.
///
/// Resolution order:
/// 1. Explicit `--products` path
/// 2. HARBORMASTER_PRODUCT_DATA environment variable
/// 3. The built-in product table
pub fn load_product_catalog(path: Option<&Path>) -> Result<Arc<ProductCatalog>> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(PRODUCT_DATA_ENV).map(PathBuf::from));

    let Some(path) = path else {
        debug!("using built-in product catalog");
        return Ok(ProductCatalog::builtin());
    };

    let catalog = ProductCatalog::from_path(&path)
        .with_context(|| format!("failed to load product data from {}", path.display()))?;
    debug!(path = %path.display(), products = catalog.len(), "loaded product catalog");
    Ok(Arc::new(catalog))
}
