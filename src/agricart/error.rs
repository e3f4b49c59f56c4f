use crate::customers::CustomerId;
use crate::model::ProductId;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Invalid specifications format: {0}")]
    InvalidSpecs(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
