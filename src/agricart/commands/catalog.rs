use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

pub fn categories<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(store.categories()))
}

pub fn featured<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_products(store.featured()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryCatalog;

    #[test]
    fn sample_catalog_categories() {
        let store = InMemoryCatalog::with_sample_data().unwrap();
        let result = categories(&store).unwrap();
        assert!(result.categories.contains(&"farm-machinery".to_string()));
        assert!(result.categories.contains(&"vehicles".to_string()));
    }

    #[test]
    fn featured_products_are_flagged() {
        let store = InMemoryCatalog::with_sample_data().unwrap();
        let result = featured(&store).unwrap();
        assert!(!result.listed_products.is_empty());
        assert!(result.listed_products.iter().all(|p| p.is_featured()));
    }
}
