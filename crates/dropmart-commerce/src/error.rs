//! Catalog error types.

use thiserror::Error;

/// Errors raised at the boundary where presentation-layer strings enter
/// the engine. The enums themselves are closed, so once a value has been
/// parsed no further validation happens inside the engine.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Category name outside the fixed department set.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Currency code outside the two supported currencies.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Sort key outside the fixed strategy set.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Product collection failed to deserialize.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidCatalog(e.to_string())
    }
}
