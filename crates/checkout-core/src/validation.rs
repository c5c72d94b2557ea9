//! # Validation Module
//!
//! Field validation for scanned product records.
//!
//! The scanning collaborator hands the checkout plain `{code, name,
//! price}` records; these checks run inside
//! [`Product::new`](crate::product::Product::new) so that an invalid
//! record can never enter a cart.
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_product_code, validate_price};
//! use rust_decimal_macros::dec;
//!
//! assert!(validate_product_code("GR1").is_ok());
//! assert!(validate_product_code("  ").is_err());
//! assert!(validate_price(dec!(0)).is_ok()); // free items are fine
//! ```

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};

/// Maximum length of a product code.
pub const MAX_CODE_LEN: usize = 50;

/// Maximum length of a product display name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
/// - Must be at most 50 characters
pub fn validate_product_code(code: &str) -> ValidationResult<()> {
    let code = code.trim();

    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "code".to_string(),
        });
    }

    if code.len() > MAX_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "code".to_string(),
            max: MAX_CODE_LEN,
        });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty (whitespace-only counts as empty)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
