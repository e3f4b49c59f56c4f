use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CatalogError, Result};
use crate::model::ProductId;
use crate::store::CatalogStore;

pub fn add<S: CatalogStore>(store: &S, cart: &mut Cart, id: &ProductId) -> Result<CmdResult> {
    let product = store
        .get(id)
        .ok_or_else(|| CatalogError::ProductNotFound(id.clone()))?;

    let mut result = CmdResult::default();
    if cart.add(&product) {
        result.add_message(CmdMessage::success(format!(
            "{} added to your cart",
            product.name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} is out of stock",
            product.name
        )));
    }
    Ok(result.with_cart(cart.clone()))
}

pub fn remove(cart: &mut Cart, id: &ProductId) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if cart.remove(id) {
        result.add_message(CmdMessage::info("Item removed from your cart"));
    } else {
        result.add_message(CmdMessage::warning(format!("Not in cart: {}", id)));
    }
    Ok(result.with_cart(cart.clone()))
}

pub fn update_quantity(cart: &mut Cart, id: &ProductId, quantity: u32) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !cart.update_quantity(id, quantity) {
        result.add_message(CmdMessage::warning(format!("Not in cart: {}", id)));
    }
    Ok(result.with_cart(cart.clone()))
}

pub fn clear(cart: &mut Cart) -> Result<CmdResult> {
    cart.clear();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Cart cleared"));
    Ok(result.with_cart(cart.clone()))
}

pub fn show(cart: &Cart) -> Result<CmdResult> {
    Ok(CmdResult::default().with_cart(cart.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::{product, CatalogFixture};

    #[test]
    fn add_known_product() {
        let store = CatalogFixture::new().with_product("a", "x", "X", 10.0).build();
        let mut cart = Cart::new();

        let result = add(&store, &mut cart, &"a".into()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.cart.unwrap().total_items(), 1);
    }

    #[test]
    fn add_out_of_stock_warns() {
        let mut sold_out = product("a", "A", "x", "X", 10.0);
        sold_out.stock = 0;
        let store = CatalogFixture::new().with(sold_out).build();
        let mut cart = Cart::new();

        let result = add(&store, &mut cart, &"a".into()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_unknown_product_fails() {
        let store = CatalogFixture::new().build();
        let mut cart = Cart::new();
        assert!(matches!(
            add(&store, &mut cart, &"ghost".into()),
            Err(CatalogError::ProductNotFound(_))
        ));
    }

    #[test]
    fn remove_and_update_report_missing_lines() {
        let mut cart = Cart::new();
        let result = remove(&mut cart, &"a".into()).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        let result = update_quantity(&mut cart, &"a".into(), 3).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
