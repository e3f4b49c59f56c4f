//! Listing order.
//!
//! Every key sorts with `sort_by` (stable), so products comparing equal keep their
//! relative input order. `newest` and `featured` only partition the list: flagged
//! products first, each side otherwise untouched.

use crate::error::CatalogError;
use crate::model::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    NameAsc,
    RatingDesc,
    Newest,
    #[default]
    Featured,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::RatingDesc,
        SortKey::Newest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::Newest => "newest",
            SortKey::Featured => "featured",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::NameAsc => compare_names(&a.name, &b.name),
            SortKey::RatingDesc => b.rating.total_cmp(&a.rating),
            SortKey::Newest => b.is_new().cmp(&a.is_new()),
            SortKey::Featured => b.is_featured().cmp(&a.is_featured()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
    }
}

/// Accent- and case-insensitive first, so "Évora" files under E. Accented and
/// lowercase spellings then break ties, raw text last so the order stays total.
fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercase with diacritics stripped: decompose (NFD), drop combining marks.
fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Sort `products` in place by `key`.
pub fn sort_products<P: std::borrow::Borrow<Product>>(products: &mut [P], key: SortKey) {
    products.sort_by(|a, b| key.compare(a.borrow(), b.borrow()));
}
