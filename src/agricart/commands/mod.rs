use crate::attributes::CategoryFilter;
use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::customers::{Customer, CustomerAddress};
use crate::model::Product;
use crate::orders::Order;
use serde::Serialize;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod create;
pub mod customers;
pub mod delete;
pub mod filters;
pub mod list;
pub mod report;
pub mod search;
pub mod update;
pub mod view;

pub use report::CatalogReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command: the data it produced plus user-facing notifications.
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<Product>,
    pub filters: Vec<CategoryFilter>,
    pub categories: Vec<String>,
    pub cart: Option<Cart>,
    pub order: Option<Order>,
    pub report: Option<CatalogReport>,
    pub config: Option<StorefrontConfig>,
    pub customers: Vec<Customer>,
    pub addresses: Vec<CustomerAddress>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_filters(mut self, filters: Vec<CategoryFilter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_report(mut self, report: CatalogReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_addresses(mut self, addresses: Vec<CustomerAddress>) -> Self {
        self.addresses = addresses;
        self
    }
}
