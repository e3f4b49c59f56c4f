use crate::attributes::{evaluate, CatalogQuery};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::sort::{sort_products, SortKey};
use crate::store::CatalogStore;

/// The product listing: filter, then order.
pub fn run<S: CatalogStore>(store: &S, query: &CatalogQuery, sort: SortKey) -> Result<CmdResult> {
    let products = store.list();
    let mut matched = evaluate(&products, query);
    sort_products(&mut matched, sort);

    let listed = matched.into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_products(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::CatalogFixture;

    fn ids(result: &CmdResult) -> Vec<&str> {
        result
            .listed_products
            .iter()
            .map(|p| p.id.as_str())
            .collect()
    }

    #[test]
    fn filters_then_sorts() {
        let store = CatalogFixture::new()
            .with_product("a", "farm-machinery", "A", 300.0)
            .with_product("b", "farm-machinery", "B", 100.0)
            .with_product("c", "vehicles", "A", 50.0)
            .with_product("d", "farm-machinery", "A", 200.0)
            .build();

        let mut query = CatalogQuery::new().with_category("farm-machinery");
        query.filters.set_select("brand", ["A"]);

        let result = run(&store, &query, SortKey::PriceAsc).unwrap();
        assert_eq!(ids(&result), vec!["d", "a"]);
    }

    #[test]
    fn empty_query_lists_everything_in_store_order_by_default() {
        let store = CatalogFixture::new()
            .with_product("a", "x", "A", 3.0)
            .with_product("b", "y", "B", 1.0)
            .build();

        let result = run(&store, &CatalogQuery::new(), SortKey::default()).unwrap();
        assert_eq!(ids(&result), vec!["a", "b"]);
    }
}
