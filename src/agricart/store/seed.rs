//! Seed catalogs.
//!
//! The storefront starts from a JSON array of products. The built-in sample is
//! embedded at compile time; `--catalog` points the CLI at a file with the same shape.

use crate::error::Result;
use crate::model::Product;
use std::path::Path;

const SAMPLE_CATALOG: &str = include_str!("sample_catalog.json");

pub fn sample_products() -> Result<Vec<Product>> {
    parse_catalog(SAMPLE_CATALOG)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(raw)?)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalog(&raw)
}
