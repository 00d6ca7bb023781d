use ezstilius_core::error::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search corpus unavailable: {0}")]
    Unavailable(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
