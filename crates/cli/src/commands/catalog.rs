//! `gourmet catalog` - print the filtered catalog.

use std::io::{self, Write};

use gourmet_core::CategoryFilter;
use gourmet_storefront::Catalog;

use crate::OutputFormat;
use crate::render;

/// Print the products matching `category` and `search` to stdout.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn list(
    catalog: &Catalog,
    category: CategoryFilter,
    search: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_list(&mut out, catalog, category, search, format)
}

fn write_list(
    out: &mut impl Write,
    catalog: &Catalog,
    category: CategoryFilter,
    search: &str,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let products = catalog.filter(&category, search);
    match format {
        OutputFormat::Text => render::product_list(out, &products)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &products)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => serde_yaml::to_writer(&mut *out, &products)?,
    }
    Ok(())
}
