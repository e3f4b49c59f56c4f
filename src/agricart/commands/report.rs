use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Product;
use crate::store::CatalogStore;
use serde::Serialize;

/// Admin dashboard figures for the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub product_count: usize,
    /// Category and product count, in first-seen category order.
    pub per_category: Vec<(String, usize)>,
    /// Sum of list price times stock.
    pub inventory_value: f64,
    pub low_stock_threshold: u32,
    /// Products with stock at or below the threshold, in store order.
    pub low_stock: Vec<Product>,
}

impl CatalogReport {
    pub fn build(products: &[Product], low_stock_threshold: u32) -> Self {
        let mut per_category: Vec<(String, usize)> = Vec::new();
        for product in products {
            match per_category.iter_mut().find(|(c, _)| c == &product.category) {
                Some((_, count)) => *count += 1,
                None => per_category.push((product.category.clone(), 1)),
            }
        }

        Self {
            product_count: products.len(),
            per_category,
            inventory_value: products
                .iter()
                .map(|p| p.price * f64::from(p.stock))
                .sum(),
            low_stock_threshold,
            low_stock: products
                .iter()
                .filter(|p| p.stock <= low_stock_threshold)
                .cloned()
                .collect(),
        }
    }
}

pub fn run<S: CatalogStore>(store: &S, low_stock_threshold: u32) -> Result<CmdResult> {
    let report = CatalogReport::build(&store.list(), low_stock_threshold);

    let mut result = CmdResult::default();
    if !report.low_stock.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "{} product(s) at or below {} units in stock",
            report.low_stock.len(),
            low_stock_threshold
        )));
    }
    Ok(result.with_report(report))
}
