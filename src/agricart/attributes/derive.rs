//! Attribute derivation.
//!
//! Builds the filter schema of each category from the products it contains:
//!
//! 1. Partition products by category (first-seen order).
//! 2. Emit `brand` as a `Select` over the distinct brands of the partition.
//! 3. Collect every spec key observed in the partition.
//! 4. For each key gather the non-blank values actually present; a key with no
//!    values yields no attribute.
//! 5. All values numeric -> `Range` over the observed extremes, with a unit inferred
//!    from the key. Otherwise -> `Select` over the distinct raw values.

use super::numeric_value;
use super::spec::{unit_for_key, CategoryAttribute, CategoryFilter, BRAND};
use crate::model::Product;
use tracing::debug;

/// Derive one [`CategoryFilter`] per distinct category in `products`.
pub fn derive_category_filters(products: &[Product]) -> Vec<CategoryFilter> {
    let mut categories: Vec<&str> = Vec::new();
    for product in products {
        if !categories.contains(&product.category.as_str()) {
            categories.push(&product.category);
        }
    }

    categories
        .into_iter()
        .filter_map(|category| derive_for_category(products, category))
        .collect()
}

/// Derive the schema of a single category. `None` if no product belongs to it.
pub fn derive_for_category(products: &[Product], category: &str) -> Option<CategoryFilter> {
    let partition: Vec<&Product> = products.iter().filter(|p| p.category == category).collect();
    if partition.is_empty() {
        return None;
    }

    let mut attributes = vec![CategoryAttribute::select(
        BRAND,
        distinct(partition.iter().map(|p| p.brand.as_str())),
    )];

    for key in spec_keys(&partition) {
        let values: Vec<&str> = partition
            .iter()
            .filter_map(|p| p.specs.get(key))
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
            .collect();

        if let Some(attribute) = classify(key, &values) {
            attributes.push(attribute);
        }
    }

    debug!(
        category,
        products = partition.len(),
        attributes = attributes.len(),
        "derived category filter"
    );

    Some(CategoryFilter {
        category: category.to_string(),
        attributes,
    })
}

/// Union of spec keys in first-seen order. A spec literally named `brand` is
/// shadowed by the reserved brand attribute and skipped.
fn spec_keys<'a>(partition: &[&'a Product]) -> Vec<&'a str> {
    let mut keys: Vec<&str> = Vec::new();
    for product in partition {
        for key in product.specs.keys() {
            if key != BRAND && !keys.contains(&key.as_str()) {
                keys.push(key);
            }
        }
    }
    keys
}

fn classify(key: &str, values: &[&str]) -> Option<CategoryAttribute> {
    if values.is_empty() {
        return None;
    }

    let numbers: Option<Vec<f64>> = values.iter().map(|v| numeric_value(v)).collect();
    match numbers {
        Some(numbers) => {
            let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
            let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            Some(CategoryAttribute::range(key, min, max, unit_for_key(key)))
        }
        None => Some(CategoryAttribute::select(
            key,
            distinct(values.iter().copied()),
        )),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.iter().any(|v| v == value) {
            out.push(value.to_string());
        }
    }
    out
}
