//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Discount rules are configured with fractional values like a        │
//! │  third off, so plain integer cents would also lose the              │
//! │  intermediate per-unit amounts (11.23 × 2/3 = 7.4866...).           │
//! │                                                                     │
//! │  OUR SOLUTION: base-10 fixed precision via rust_decimal,            │
//! │  carried exactly through evaluation and rounded ONCE at the end.    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(10.99));
//!
//! // Arithmetic operations
//! let doubled = price * 2u32;                 // 21.98
//! let total = doubled + Money::new(dec!(5));  // 26.98
//!
//! assert_eq!(total, Money::new(dec!(26.98)));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact base-10 decimal.
///
/// ## Design Decisions
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **Signed**: Allows negative values for corrections and refunds
/// - **Transparent serde**: Serializes as the bare decimal number
///
/// Every monetary value in the checkout flows through this type:
/// product prices, configured discounted unit prices, per-group charge
/// amounts, and the final rounded total.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a decimal amount.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(10.99));
    /// assert_eq!(price.amount(), dec!(10.99));
    /// ```
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::from_major_minor(10, 99);
    /// assert_eq!(price.amount(), dec!(10.99));
    ///
    /// let refund = Money::from_major_minor(-5, 50); // -5.50
    /// assert_eq!(refund.amount(), dec!(-5.50));
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -5.50, not -4.50.
    #[inline]
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        // Handle sign: if major is negative, minor should subtract
        let units = if major < 0 {
            major * 100 - minor
        } else {
            major * 100 + minor
        };
        Money(Decimal::new(units, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Applies a fractional discount to the unit amount.
    ///
    /// A `fraction` of `1/3` means a third off: the result is
    /// `amount × (1 − fraction)`, kept at full precision. Rounding to
    /// displayable money happens once, on the checkout total.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(100));
    /// assert_eq!(price.percent_off(dec!(0.25)), Money::new(dec!(75.00)));
    /// ```
    pub fn percent_off(&self, fraction: Decimal) -> Money {
        Money(self.0 * (Decimal::ONE - fraction))
    }

    /// Rounds to 2 decimal places, half away from zero.
    ///
    /// ## Rounding Rule
    /// The midpoint rule is round-half-away-from-zero (2.345 → 2.35),
    /// applied exactly once per checkout total. Bankers rounding was
    /// considered and rejected: receipts are totalled independently, so
    /// there is no accumulation across transactions to de-bias.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// assert_eq!(Money::new(dec!(29.9466)).rounded(), Money::new(dec!(29.95)));
    /// assert_eq!(Money::new(dec!(2.345)).rounded(), Money::new(dec!(2.35)));
    /// assert_eq!(Money::new(dec!(-2.345)).rounded(), Money::new(dec!(-2.35)));
    /// ```
    pub fn rounded(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a quantity of units.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.amount(), dec!(10.99));

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.amount(), dec!(-5.50));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "$10.99");
        assert_eq!(format!("{}", Money::new(dec!(5))), "$5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.5))), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.00));

        assert_eq!(a + b, Money::new(dec!(15.00)));
        assert_eq!(a - b, Money::new(dec!(5.00)));
        assert_eq!(a * 3u32, Money::new(dec!(30.00)));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc, Money::new(dec!(15.00)));
    }

    #[test]
    fn test_percent_off_keeps_full_precision() {
        // 11.23 with a third off: the per-unit amount is not rounded,
        // only the eventual total is.
        let price = Money::new(dec!(11.23));
        let fraction = Decimal::ONE / dec!(3);
        let discounted = price.percent_off(fraction);

        assert_eq!((discounted * 4u32).rounded(), Money::new(dec!(29.95)));
        assert_eq!((discounted * 5u32).rounded(), Money::new(dec!(37.43)));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(Money::new(dec!(2.344)).rounded(), Money::new(dec!(2.34)));
        assert_eq!(Money::new(dec!(2.345)).rounded(), Money::new(dec!(2.35)));
        assert_eq!(Money::new(dec!(2.346)).rounded(), Money::new(dec!(2.35)));
        assert_eq!(Money::new(dec!(-2.345)).rounded(), Money::new(dec!(-2.35)));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::new(dec!(-0.01)).is_negative());
        assert!(!Money::new(dec!(0.01)).is_negative());
    }
}
