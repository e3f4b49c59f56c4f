use crate::commands::CmdResult;
use crate::error::{CatalogError, Result};
use crate::model::ProductId;
use crate::store::CatalogStore;

/// A single product, as on its detail page.
pub fn run<S: CatalogStore>(store: &S, id: &ProductId) -> Result<CmdResult> {
    let product = store
        .get(id)
        .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))?;
    Ok(CmdResult::default().with_listed_products(vec![product]))
}

/// Products shown under "related" on a detail page.
pub fn related<S: CatalogStore>(store: &S, id: &ProductId, limit: usize) -> Result<CmdResult> {
    if store.get(id).is_none() {
        return Err(CatalogError::ProductNotFound(id.clone()));
    }
    Ok(CmdResult::default().with_listed_products(store.list_related(id, limit)))
}
