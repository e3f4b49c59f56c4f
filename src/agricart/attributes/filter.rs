//! Catalog filtering.
//!
//! [`evaluate`] computes the products matching a [`CatalogQuery`]. Every constraint
//! is a predicate on a single product and they are combined with AND, so the order
//! in which they are checked never changes the result.
//!
//! Constraints:
//! - **category**: exact match, skipped when empty.
//! - **search**: case-insensitive substring of name, description or brand.
//! - **price**: inclusive bounds on `Product::price`.
//! - **brand** select: product brand is one of the options.
//! - **spec** select: `specs[key]` is one of the options; a missing spec excludes.
//! - **spec** range: `specs[key]` parses as a number within the bounds; a missing
//!   or non-numeric spec excludes.
//!
//! The evaluator does not check that filter keys belong to the selected category.
//! Keeping selections consistent with the category is the caller's job; see
//! [`CatalogQuery::set_category`].

use super::numeric_value;
use super::spec::BRAND;
use super::value::{ActiveFilters, FilterValue};
use crate::model::Product;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything that narrows a product listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Free-text search term. Empty means no search.
    pub search: String,
    /// Category to restrict to. Empty means all categories.
    pub category: String,
    pub filters: ActiveFilters,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Restrict to `category`. Unlike [`CatalogQuery::set_category`] this keeps
    /// whatever filters the query already carries.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_filters(mut self, filters: ActiveFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Switch category. Selections made for another category's schema are dropped.
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != self.category {
            self.filters.clear();
            self.category = category;
        }
    }

    /// Whether `product` satisfies every constraint of this query.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.is_empty() && product.category != self.category {
            return false;
        }
        if !self.search.is_empty() && !matches_search(product, &self.search) {
            return false;
        }
        if let Some(min) = self.price_min {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if product.price > max {
                return false;
            }
        }
        self.filters
            .active()
            .all(|(key, value)| matches_filter(product, key, value))
    }
}

/// Case-insensitive substring search over name, description and brand.
pub fn matches_search(product: &Product, term: &str) -> bool {
    let term = term.to_lowercase();
    product.name.to_lowercase().contains(&term)
        || product.description.to_lowercase().contains(&term)
        || product.brand.to_lowercase().contains(&term)
}

fn matches_filter(product: &Product, key: &str, value: &FilterValue) -> bool {
    match value {
        FilterValue::Select { values } => {
            if key == BRAND {
                values.contains(&product.brand)
            } else {
                product
                    .specs
                    .get(key)
                    .is_some_and(|spec| values.contains(spec))
            }
        }
        FilterValue::Range { min, max } => {
            let Some(number) = product.specs.get(key).and_then(|s| numeric_value(s)) else {
                return false;
            };
            min.map_or(true, |m| number >= m) && max.map_or(true, |m| number <= m)
        }
    }
}

/// The products matching `query`, in input order.
pub fn evaluate<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let matched: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();
    debug!(
        total = products.len(),
        matched = matched.len(),
        category = %query.category,
        "evaluated catalog query"
    );
    matched
}
