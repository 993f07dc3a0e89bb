//! CLI command implementations.

use std::path::Path;

use tracing::info;

use gourmet_storefront::{Catalog, Product};

pub mod catalog;
pub mod shell;

/// Load the catalog from a YAML product list, or the built-in catalog.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a YAML list of
/// products, or breaks catalog rules (duplicate ids, negative prices).
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Catalog::gourmet());
    };

    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    info!(path = %path.display(), "Loading catalog from file");
    let content = std::fs::read_to_string(path)?;
    let products: Vec<Product> = serde_yaml::from_str(&content)?;
    let catalog = Catalog::new(products)?;
    info!(products = catalog.len(), "Catalog loaded");

    Ok(catalog)
}
