use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::model::{NewProduct, Product, ProductId, ProductPatch};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, info};

/// Session-scoped catalog held in memory.
///
/// Nothing survives the process: every mutation is lost when the store is dropped.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    /// Last millisecond stamp handed out, so ids stay unique within a millisecond.
    last_stamp: i64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing products. Ids must be unique and every product
    /// must pass [`Product::validate`].
    pub fn with_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id.clone()) {
                return Err(CatalogError::Validation(format!(
                    "duplicate product id in catalog: {}",
                    product.id
                )));
            }
        }
        debug!(count = products.len(), "catalog loaded");
        Ok(Self {
            products,
            last_stamp: 0,
        })
    }

    /// Store seeded with the built-in sample catalog.
    pub fn with_sample_data() -> Result<Self> {
        Self::with_products(super::seed::sample_products()?)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn next_id(&mut self) -> ProductId {
        let mut stamp = Utc::now().timestamp_millis().max(self.last_stamp + 1);
        loop {
            let candidate = ProductId::new(format!("product-{}", stamp));
            if !self.products.iter().any(|p| p.id == candidate) {
                self.last_stamp = stamp;
                return candidate;
            }
            stamp += 1;
        }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn add(&mut self, product: NewProduct) -> ProductId {
        let id = self.next_id();
        info!(id = %id, name = %product.name, "product added");
        self.products.push(Product::from_new(id.clone(), product));
        id
    }

    fn update(&mut self, id: &ProductId, patch: ProductPatch) -> bool {
        match self.products.iter_mut().find(|p| &p.id == id) {
            Some(product) => {
                patch.apply(product);
                info!(id = %id, "product updated");
                true
            }
            None => {
                debug!(id = %id, "update skipped, product not found");
                false
            }
        }
    }

    fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        let removed = self.products.len() != before;
        if removed {
            info!(id = %id, "product removed");
        }
        removed
    }

    fn get(&self, id: &ProductId) -> Option<Product> {
        self.products.iter().find(|p| &p.id == id).cloned()
    }

    fn list(&self) -> Vec<Product> {
        self.products.clone()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Specs;

    /// Builder for small hand-made catalogs.
    pub struct CatalogFixture {
        pub store: InMemoryCatalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    pub fn product(id: &str, name: &str, category: &str, brand: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            subcategory: String::new(),
            price,
            images: vec![format!("https://img.example/{}.jpg", id)],
            description: format!("{} description", name),
            features: Vec::new(),
            specs: Specs::new(),
            stock: 5,
            rating: 4.0,
            reviews: 10,
            brand: brand.to_string(),
            is_new: None,
            is_featured: None,
            discount: None,
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryCatalog::new(),
            }
        }

        pub fn with(mut self, product: Product) -> Self {
            self.store.products.push(product);
            self
        }

        pub fn with_product(self, id: &str, category: &str, brand: &str, price: f64) -> Self {
            self.with(product(id, id, category, brand, price))
        }

        pub fn with_specs(
            self,
            id: &str,
            category: &str,
            brand: &str,
            specs: &[(&str, &str)],
        ) -> Self {
            let mut p = product(id, id, category, brand, 1000.0);
            p.specs = specs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            self.with(p)
        }

        pub fn build(self) -> InMemoryCatalog {
            self.store
        }
    }
}
