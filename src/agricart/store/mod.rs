//! # Storage Layer
//!
//! This module defines the catalog storage abstraction. The [`CatalogStore`] trait is
//! the contract a real backend would have to satisfy to replace the in-memory store;
//! everything above it (commands, API, CLI) only talks to the trait.
//!
//! ## Ownership
//!
//! The store is the single owner of the product collection. Consumers never keep
//! their own copies in sync: they re-read from the store on every operation, and
//! all derived data (attribute schemas, filtered lists) is recomputed from a fresh
//! read. A mutation is therefore visible to every view on the next read.
//!
//! ## Not-Found Semantics
//!
//! `update` and `remove` report an unknown id with `false` and leave the store
//! untouched. They never return an error for this case.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryCatalog`]: session-scoped `Vec<Product>`, the only backend.
//! - [`seed`]: loading of JSON seed catalogs (the built-in sample or a file).

use crate::model::{NewProduct, Product, ProductId, ProductPatch};

pub mod memory;
pub mod seed;

/// Abstract interface for catalog storage.
///
/// Required methods are the CRUD surface; the query helpers are provided on top of
/// [`CatalogStore::list`] and keep store order.
pub trait CatalogStore {
    /// Assign a fresh id, append the product and return the id.
    fn add(&mut self, product: NewProduct) -> ProductId;

    /// Merge `patch` into the product with `id`. Returns `false` if there is none.
    fn update(&mut self, id: &ProductId, patch: ProductPatch) -> bool;

    /// Remove the product with `id`. Returns `false` if there is none.
    fn remove(&mut self, id: &ProductId) -> bool;

    /// Get a product by id
    fn get(&self, id: &ProductId) -> Option<Product>;

    /// All products, in store order
    fn list(&self) -> Vec<Product>;

    fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.list()
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Products sharing the category OR the subcategory of `id`, excluding `id`
    /// itself, truncated to `limit`. Unknown ids yield an empty list.
    fn list_related(&self, id: &ProductId, limit: usize) -> Vec<Product> {
        let Some(current) = self.get(id) else {
            return Vec::new();
        };

        self.list()
            .into_iter()
            .filter(|p| {
                p.id != current.id
                    && (p.category == current.category || p.subcategory == current.subcategory)
            })
            .take(limit)
            .collect()
    }

    fn featured(&self) -> Vec<Product> {
        self.list().into_iter().filter(|p| p.is_featured()).collect()
    }

    /// Distinct categories in first-seen order.
    fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for product in self.list() {
            if !seen.contains(&product.category) {
                seen.push(product.category);
            }
        }
        seen
    }
}
