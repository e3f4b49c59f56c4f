//! Checkout and order tracking.
//!
//! Totals follow the storefront's pricing rules:
//!
//! | Component | Rule |
//! |-----------|------|
//! | shipping, express | 750 |
//! | shipping, standard | free above a 5000 subtotal, otherwise 350 |
//! | tax | 8% of the subtotal |
//!
//! An order moves through a fixed pipeline, one step at a time:
//! `ordered -> processed -> shipped -> delivered`.

use crate::cart::{Cart, CartItem};
use crate::error::{CatalogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

pub const TAX_RATE: f64 = 0.08;
pub const FREE_SHIPPING_ABOVE: f64 = 5000.0;
pub const STANDARD_SHIPPING: f64 = 350.0;
pub const EXPRESS_SHIPPING: f64 = 750.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    #[default]
    Standard,
    Express,
}

impl ShippingMethod {
    pub fn cost(&self, subtotal: f64) -> f64 {
        match self {
            ShippingMethod::Express => EXPRESS_SHIPPING,
            ShippingMethod::Standard if subtotal > FREE_SHIPPING_ABOVE => 0.0,
            ShippingMethod::Standard => STANDARD_SHIPPING,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingInfo {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("first name", &self.first_name),
            ("last name", &self.last_name),
            ("email", &self.email),
            ("address", &self.address),
            ("city", &self.city),
            ("zip code", &self.zip_code),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogError::Validation(format!("{} is required", label)));
            }
        }
        if !self.email.contains('@') {
            return Err(CatalogError::Validation(format!(
                "invalid email address: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Price breakdown of a cart at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderTotals {
    pub fn compute(subtotal: f64, method: ShippingMethod) -> Self {
        let shipping = method.cost(subtotal);
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Ordered,
    Processed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const PIPELINE: [OrderStatus; 4] = [
        OrderStatus::Ordered,
        OrderStatus::Processed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn index(&self) -> usize {
        match self {
            OrderStatus::Ordered => 0,
            OrderStatus::Processed => 1,
            OrderStatus::Shipped => 2,
            OrderStatus::Delivered => 3,
        }
    }

    pub fn next(&self) -> Option<OrderStatus> {
        Self::PIPELINE.get(self.index() + 1).copied()
    }

    /// Completion of the pipeline in percent. `Ordered` is already 25.
    pub fn progress(&self) -> f64 {
        (self.index() + 1) as f64 / Self::PIPELINE.len() as f64 * 100.0
    }

    /// Where `step` stands relative to this status.
    pub fn step_state(&self, step: OrderStatus) -> StepState {
        match step.index().cmp(&self.index()) {
            std::cmp::Ordering::Less => StepState::Completed,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    fn history_message(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "Order placed",
            OrderStatus::Processed => "Payment confirmed and order processed",
            OrderStatus::Shipped => "Order has shipped from our warehouse",
            OrderStatus::Delivered => "Order delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Ordered => "ordered",
            OrderStatus::Processed => "processed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub tracking_number: String,
    pub items: Vec<CartItem>,
    pub totals: OrderTotals,
    pub shipping_info: ShippingInfo,
    pub shipping_method: ShippingMethod,
    pub status: OrderStatus,
    pub history: Vec<StatusEvent>,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Move one step down the pipeline. Returns `false` once delivered.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.status.next() else {
            return false;
        };
        self.status = next;
        self.history.push(StatusEvent {
            status: next,
            at: Utc::now(),
            message: next.history_message().to_string(),
        });
        true
    }

    pub fn progress(&self) -> f64 {
        self.status.progress()
    }

    /// Every pipeline step with its state, in pipeline order.
    pub fn steps(&self) -> Vec<(OrderStatus, StepState)> {
        OrderStatus::PIPELINE
            .iter()
            .map(|step| (*step, self.status.step_state(*step)))
            .collect()
    }
}

/// Orders placed during the session.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Turn the cart into an order and empty it.
    ///
    /// Nothing changes on error: the cart keeps its items and no order is recorded.
    pub fn place_order(
        &mut self,
        cart: &mut Cart,
        shipping_info: ShippingInfo,
        method: ShippingMethod,
    ) -> Result<&Order> {
        if cart.is_empty() {
            return Err(CatalogError::EmptyCart);
        }
        shipping_info.validate()?;

        let id = Uuid::new_v4();
        let now = Utc::now();
        let order = Order {
            id,
            tracking_number: tracking_number(&id),
            items: cart.items().to_vec(),
            totals: OrderTotals::compute(cart.total_price(), method),
            shipping_info,
            shipping_method: method,
            status: OrderStatus::Ordered,
            history: vec![StatusEvent {
                status: OrderStatus::Ordered,
                at: now,
                message: OrderStatus::Ordered.history_message().to_string(),
            }],
            placed_at: now,
        };
        cart.clear();

        info!(id = %order.id, total = order.totals.total, "order placed");
        self.orders.push(order);
        let placed = self.orders.len() - 1;
        Ok(&self.orders[placed])
    }

    pub fn track(&self, id: &Uuid) -> Result<&Order> {
        self.orders
            .iter()
            .find(|o| &o.id == id)
            .ok_or(CatalogError::OrderNotFound(*id))
    }

    pub fn advance(&mut self, id: &Uuid) -> Result<&Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or(CatalogError::OrderNotFound(*id))?;
        if order.advance() {
            info!(id = %order.id, status = %order.status, "order advanced");
        }
        Ok(order)
    }
}

fn tracking_number(id: &Uuid) -> String {
    let digits: String = id.simple().to_string().chars().take(10).collect();
    format!("TRACK-{}", digits.to_uppercase())
}
