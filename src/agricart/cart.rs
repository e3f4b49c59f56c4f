//! Shopping cart.
//!
//! Lines are keyed by product id. The unit price is captured when the product is
//! first added (discount already applied), so later catalog edits do not reprice a
//! line already in the cart. Totals are computed on every read.

use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time of adding.
    pub price: f64,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Add one unit of `product`. Returns `false` if it is out of stock.
    pub fn add(&mut self, product: &Product) -> bool {
        if !product.in_stock() {
            warn!(id = %product.id, "refusing to add out-of-stock product to cart");
            return false;
        }

        match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.effective_price(),
                image: product.primary_image().to_string(),
                quantity: 1,
            }),
        }
        debug!(id = %product.id, items = self.total_items(), "cart updated");
        true
    }

    /// Drop the line for `id`. Returns `false` if there was none.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Set the quantity of a line. Quantities below 1 are raised to 1; removing a
    /// line is [`Cart::remove`]'s job.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::product;

    #[test]
    fn adding_twice_increments_quantity() {
        let tractor = product("tractor-1", "Tractor", "farm-machinery", "AgriPro", 100.0);
        let mut cart = Cart::new();

        assert!(cart.add(&tractor));
        assert!(cart.add(&tractor));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 200.0);
    }

    #[test]
    fn captures_discounted_price_and_first_image() {
        let mut tiller = product("tiller-1", "Tiller", "garden", "EarthWorks", 200.0);
        tiller.discount = Some(15);
        let mut cart = Cart::new();
        cart.add(&tiller);

        let line = cart.get(&"tiller-1".into()).unwrap();
        assert!((line.price - 170.0).abs() < 1e-9);
        assert_eq!(line.image, "https://img.example/tiller-1.jpg");
    }

    #[test]
    fn out_of_stock_products_are_refused() {
        let mut sold_out = product("x", "X", "c", "B", 10.0);
        sold_out.stock = 0;
        let mut cart = Cart::new();

        assert!(!cart.add(&sold_out));
        assert!(cart.is_empty());
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let p = product("a", "A", "c", "B", 10.0);
        let mut cart = Cart::new();
        cart.add(&p);

        assert!(cart.update_quantity(&"a".into(), 0));
        assert_eq!(cart.total_items(), 1);

        assert!(cart.update_quantity(&"a".into(), 5));
        assert_eq!(cart.total_price(), 50.0);

        assert!(!cart.update_quantity(&"missing".into(), 2));
    }

    #[test]
    fn remove_and_clear() {
        let a = product("a", "A", "c", "B", 10.0);
        let b = product("b", "B", "c", "B", 20.0);
        let mut cart = Cart::new();
        cart.add(&a);
        cart.add(&b);

        assert!(cart.remove(&"a".into()));
        assert!(!cart.remove(&"a".into()));
        assert_eq!(cart.total_price(), 20.0);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }
}
