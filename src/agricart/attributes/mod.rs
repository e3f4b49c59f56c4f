//! # Attribute System
//!
//! Catalog filtering is schema-driven: instead of hard-coding a filter panel per
//! category, the storefront inspects the products of each category and derives
//! which attributes can be filtered and how.
//!
//! - **Specifications** ([`spec`]): the derived schema, one [`CategoryFilter`] per
//!   category, each a list of [`CategoryAttribute`]s.
//! - **Derivation** ([`derive`]): pure functions building that schema from products.
//! - **Values** ([`value`]): the user's active selections, as typed [`FilterValue`]s.
//! - **Filtering** ([`filter`]): the evaluator combining category, free-text search
//!   and active selections into a subset of products.
//!
//! ## Attribute Kinds
//!
//! | Kind | Derived when | Filter value |
//! |------|--------------|--------------|
//! | `Select` | `brand`, or any spec with a non-numeric observed value | set of options |
//! | `Range` | every observed spec value parses as a finite number | optional min / max |
//! | `Text`, `Number` | never derived; declared for hand-built schemas | ignored |
//!
//! ## Usage
//!
//! ```ignore
//! let schema = derive_category_filters(&products);
//!
//! let mut query = CatalogQuery::default();
//! query.set_category("farm-machinery");
//! query.filters.set_min("Horsepower", 120.0);
//! let hits = evaluate(&products, &query);
//! ```
//!
//! Everything here is recomputed from scratch on every call. There is no cache to
//! invalidate: the catalog is small and derivation is idempotent.

mod derive;
mod filter;
mod spec;
mod value;

pub use derive::{derive_category_filters, derive_for_category};
pub use filter::{evaluate, matches_search, CatalogQuery};
pub use spec::{display_name, unit_for_key, AttributeKind, CategoryAttribute, CategoryFilter, BRAND};
pub use value::{ActiveFilters, FilterValue};

/// Interpret a raw spec value as a number.
///
/// Surrounding whitespace is ignored; empty strings and non-finite results are not
/// numbers. Nothing is ever coerced to zero.
pub fn numeric_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
