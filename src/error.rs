use rust_decimal::Decimal;
use thiserror::Error;

/// Rejections from the manual entry path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BillingError {
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Quantity {0} is too large to price")]
    QuantityOutOfRange(Decimal),
}

/// Problems found while assembling a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(String),

    #[error("Price for {name} must be positive, got {price}")]
    NonPositivePrice { name: String, price: Decimal },

    #[error("Empty {0} in catalog table")]
    EmptyName(&'static str),

    #[error("Catalog tables do not compile into patterns: {0}")]
    Pattern(#[from] regex::Error),
}
