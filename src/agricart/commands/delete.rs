use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ProductId;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, ids: &[ProductId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let Some(product) = store.get(id) else {
            result.add_message(CmdMessage::warning(format!("Product not found: {}", id)));
            continue;
        };
        if store.remove(id) {
            result.add_message(CmdMessage::success(format!(
                "Product deleted ({}): {}",
                id, product.name
            )));
            result.affected_products.push(product);
        }
    }

    Ok(result)
}
