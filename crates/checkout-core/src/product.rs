//! # Product
//!
//! The immutable product value scanned into a checkout.
//!
//! A product is a `{code, name, price}` triple. The code identifies the
//! kind of product (it both groups cart contents and selects the
//! discount rule that governs them); several scanned products may share
//! one code, each representing a distinct physical unit.

use serde::{Deserialize, Serialize};

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_code, validate_product_name};

/// A product scanned at the checkout.
///
/// Immutable once constructed; fields are private so a product that
/// passed validation can never be edited into an invalid one.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, Product};
/// use rust_decimal_macros::dec;
///
/// let tea = Product::new("GR1", "Green Tea", Money::new(dec!(3.11))).unwrap();
/// assert_eq!(tea.code(), "GR1");
///
/// // Empty code or name is rejected at the boundary.
/// assert!(Product::new("", "Green Tea", Money::new(dec!(3.11))).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product code - identifies the kind of product.
    code: String,

    /// Display name shown to the customer.
    name: String,

    /// Unit price. Non-negative; zero means a free item.
    price: Money,
}

impl Product {
    /// Creates a product, validating the scanned record.
    ///
    /// ## Errors
    /// - empty or over-long `code` or `name`
    /// - negative `price`
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let code = code.into();
        let name = name.into();

        validate_product_code(&code)?;
        validate_product_name(&name)?;
        validate_price(price.amount())?;

        Ok(Product { code, name, price })
    }

    /// Returns the product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_create_product() {
        let product = Product::new("GR1", "Green Tea", Money::new(dec!(3.11))).unwrap();

        assert_eq!(product.code(), "GR1");
        assert_eq!(product.name(), "Green Tea");
        assert_eq!(product.price(), Money::new(dec!(3.11)));
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let err = Product::new("", "Banana", Money::new(dec!(1))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "code".to_string()
            }
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let err = Product::new("BN1", "   ", Money::new(dec!(1))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let err = Product::new("BN1", "Banana", Money::new(dec!(-1))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Negative {
                field: "price".to_string()
            }
        );
    }

    #[test]
    fn test_zero_price_is_allowed() {
        assert!(Product::new("BN1", "Banana", Money::zero()).is_ok());
    }
}
