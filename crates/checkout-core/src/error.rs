//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, limits)
//! 3. Errors are enum variants, never String
//!
//! The only fallible operation in the core is constructing a
//! [`Product`](crate::product::Product): a scanned record with an empty
//! code or name, or a negative price, is rejected at that boundary.
//! Everything downstream (rule resolution, evaluation, deletion of a
//! missing product) is total and degrades instead of failing.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a scanned product record doesn't meet the
/// domain invariants. Raised before the record can enter a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Monetary value is negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
