//! Commerce error types.

use thiserror::Error;

/// Errors raised by the validating layers around the cart and catalog.
///
/// The pricing and query engines themselves are total and never return
/// these; they show up when a line item or config is being constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Product cannot be added because it is out of stock.
    #[error("Product is out of stock: {0}")]
    OutOfStock(String),

    /// Chosen color is not offered by the product.
    #[error("Color {color:?} is not available for {product_id}")]
    ColorUnavailable { product_id: String, color: String },

    /// Chosen size is not offered by the product.
    #[error("Size {size:?} is not available for {product_id}")]
    SizeUnavailable { product_id: String, size: String },

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Newsletter signup with a missing or malformed address.
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    /// An order was requested for a cart with no items.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,

    /// Sort key not recognized.
    #[error("Unknown sort option: {0}")]
    UnknownSortKey(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CommerceError::ColorUnavailable {
            product_id: "3".to_string(),
            color: "Teal".to_string(),
        };
        assert_eq!(err.to_string(), "Color \"Teal\" is not available for 3");
        assert_eq!(
            CommerceError::QuantityExceedsLimit(120, 99).to_string(),
            "Quantity 120 exceeds maximum allowed (99)"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let converted: CommerceError = err.into();
        assert!(matches!(converted, CommerceError::SerializationError(_)));
    }
}
