use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ProductId, ProductPatch};
use crate::store::CatalogStore;

/// Merge `patch` into a product. An unknown id is reported as a warning, not an error.
pub fn run<S: CatalogStore>(
    store: &mut S,
    id: &ProductId,
    patch: ProductPatch,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if patch.is_empty() {
        result.add_message(CmdMessage::info("Nothing to update"));
        return Ok(result);
    }
    patch.validate()?;

    if !store.update(id, patch) {
        result.add_message(CmdMessage::warning(format!("Product not found: {}", id)));
        return Ok(result);
    }

    let Some(updated) = store.get(id) else {
        return Ok(result);
    };
    result.add_message(CmdMessage::success(format!(
        "Product updated ({}): {}",
        id, updated.name
    )));
    Ok(result.with_affected_products(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::CatalogError;
    use crate::store::memory::fixtures::CatalogFixture;

    #[test]
    fn updates_existing_product() {
        let mut store = CatalogFixture::new()
            .with_product("a", "vehicles", "RuralHauler", 100.0)
            .build();
        let patch = ProductPatch {
            price: Some(90.0),
            discount: Some(10),
            ..Default::default()
        };

        let result = run(&mut store, &"a".into(), patch).unwrap();
        assert_eq!(result.affected_products[0].price, 90.0);
        assert_eq!(store.get(&"a".into()).unwrap().discount, Some(10));
    }

    #[test]
    fn unknown_id_is_a_warning() {
        let mut store = CatalogFixture::new()
            .with_product("a", "vehicles", "RuralHauler", 100.0)
            .build();
        let before = store.list();
        let patch = ProductPatch {
            stock: Some(1),
            ..Default::default()
        };

        let result = run(&mut store, &"zzz".into(), patch).unwrap();
        assert!(result.affected_products.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.list(), before);
    }

    #[test]
    fn invalid_patch_is_rejected_before_touching_the_store() {
        let mut store = CatalogFixture::new()
            .with_product("a", "vehicles", "RuralHauler", 100.0)
            .build();
        let patch = ProductPatch {
            rating: Some(7.5),
            ..Default::default()
        };

        let result = run(&mut store, &"a".into(), patch);
        assert!(matches!(result, Err(CatalogError::Validation(_))));
        assert_eq!(store.get(&"a".into()).unwrap().rating, 4.0);
    }

    #[test]
    fn empty_patch_does_nothing() {
        let mut store = CatalogFixture::new()
            .with_product("a", "vehicles", "RuralHauler", 100.0)
            .build();
        let result = run(&mut store, &"a".into(), ProductPatch::default()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.affected_products.is_empty());
    }
}
