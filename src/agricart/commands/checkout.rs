use crate::cart::Cart;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::orders::{OrderBook, ShippingInfo, ShippingMethod};
use uuid::Uuid;

pub fn place_order(
    book: &mut OrderBook,
    cart: &mut Cart,
    shipping_info: ShippingInfo,
    method: ShippingMethod,
) -> Result<CmdResult> {
    let order = book.place_order(cart, shipping_info, method)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Order placed: {} (tracking {})",
        order.id, order.tracking_number
    )));
    Ok(result.with_order(order).with_cart(cart.clone()))
}

pub fn track(book: &OrderBook, id: &Uuid) -> Result<CmdResult> {
    let order = book.track(id)?.clone();
    Ok(CmdResult::default().with_order(order))
}

pub fn advance(book: &mut OrderBook, id: &Uuid) -> Result<CmdResult> {
    let order = book.advance(id)?.clone();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Order {} is {}", order.id, order.status)));
    Ok(result.with_order(order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::orders::OrderStatus;
    use crate::store::memory::fixtures::product;

    fn info() -> ShippingInfo {
        ShippingInfo {
            first_name: "Jo".into(),
            last_name: "Lima".into(),
            email: "jo@example.com".into(),
            address: "Estrada 1".into(),
            city: "Ribeirão Preto".into(),
            zip_code: "14000-000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn order_flow() {
        let mut book = OrderBook::new();
        let mut cart = Cart::new();
        cart.add(&product("a", "A", "x", "X", 100.0));

        let placed = place_order(&mut book, &mut cart, info(), ShippingMethod::Express).unwrap();
        let order = placed.order.unwrap();
        assert!(placed.cart.unwrap().is_empty());
        assert_eq!(order.totals.shipping, 750.0);

        let tracked = track(&book, &order.id).unwrap();
        assert_eq!(tracked.order.unwrap().status, OrderStatus::Ordered);

        let advanced = advance(&mut book, &order.id).unwrap();
        assert_eq!(advanced.order.unwrap().status, OrderStatus::Processed);
    }

    #[test]
    fn empty_cart_is_rejected() {
        let mut book = OrderBook::new();
        let mut cart = Cart::new();
        assert!(matches!(
            place_order(&mut book, &mut cart, info(), ShippingMethod::Standard),
            Err(CatalogError::EmptyCart)
        ));
    }
}
