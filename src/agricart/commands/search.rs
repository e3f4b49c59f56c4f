use crate::attributes::matches_search;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CatalogStore;

/// Quick search from the navigation bar.
///
/// Broader than the listing's search box: the category name matches too, so
/// "vehicles" finds every vehicle.
pub fn run<S: CatalogStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(CmdResult::default());
    }

    let needle = term.to_lowercase();
    let listed = store
        .list()
        .into_iter()
        .filter(|p| matches_search(p, term) || p.category.to_lowercase().contains(&needle))
        .collect();

    Ok(CmdResult::default().with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{product, CatalogFixture};

    #[test]
    fn matches_name_brand_and_category() {
        let store = CatalogFixture::new()
            .with(product("t", "AgriPro X360 Tractor", "farm-machinery", "AgriPro", 1.0))
            .with(product("u", "Utility Truck", "vehicles", "RuralHauler", 1.0))
            .with(product("s", "Sprayer", "farm-machinery", "SprayMaster", 1.0))
            .build();

        let by_name = run(&store, "tractor").unwrap();
        assert_eq!(by_name.listed_products.len(), 1);
        assert_eq!(by_name.listed_products[0].id.as_str(), "t");

        let by_brand = run(&store, "ruralhauler").unwrap();
        assert_eq!(by_brand.listed_products[0].id.as_str(), "u");

        let by_category = run(&store, "Farm-Machinery").unwrap();
        assert_eq!(by_category.listed_products.len(), 2);
    }

    #[test]
    fn blank_term_finds_nothing() {
        let store = CatalogFixture::new().with_product("a", "x", "A", 1.0).build();
        assert!(run(&store, "  ").unwrap().listed_products.is_empty());
    }
}
