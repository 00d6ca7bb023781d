use rust_decimal::Decimal;
use thiserror::Error;

pub use crate::types::config::ConfigError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid product id: {0}")]
    InvalidProductId(String),

    #[error("invalid handle: {0}")]
    InvalidHandle(String),

    #[error("invalid color tag: {0}")]
    InvalidColor(String),

    #[error("price must not be negative: {0}")]
    NegativePrice(Decimal),

    #[error("original price {original} must be above sale price {price}")]
    OriginalPriceNotAbove { price: Decimal, original: Decimal },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog backend unreachable: {0}")]
    Unreachable(String),

    #[error("malformed catalog payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
