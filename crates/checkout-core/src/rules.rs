//! # Discount Rules
//!
//! The closed set of quantity-discount rule shapes and their pure
//! evaluation function.
//!
//! ## Rule Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  NoDiscount                     q × p                               │
//! │                                                                     │
//! │  FreeAfterN { n }               ceil(q / n) × p                     │
//! │    every complete group of n units, one unit is effectively free    │
//! │                                                                     │
//! │  FlatPriceAfterThreshold        q ≥ t  →  q × dp                    │
//! │    { t, dp }                    q < t  →  q × p                     │
//! │                                                                     │
//! │  PercentOffAfterThreshold       q ≥ t  →  q × p × (1 − f)           │
//! │    { t, f }                     q < t  →  q × p                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rule is one variant of one enum, and evaluation is a single
//! exhaustive match. Each checkout-relevant parameter lives on the
//! variant that needs it; the set of product codes a rule governs is
//! registry data (see [`crate::registry`]), not evaluation data.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Rule Names
// =============================================================================

/// Identifiers used to look up a rule's configuration entry.
///
/// Rule names are independent of product codes: the configuration maps
/// a rule name to its parameters, and one of those parameters is the
/// list of product codes the rule governs.
pub mod rule_names {
    /// Buy a group of N, pay for the group minus one.
    pub const TWO_FOR_ONE: &str = "two_for_one";

    /// Flat discounted unit price once the threshold quantity is met.
    pub const BULK_PRICE: &str = "bulk_price";

    /// Fraction off every unit once the threshold quantity is met.
    pub const PERCENT_OFF: &str = "percent_off";
}

// =============================================================================
// Built-in Defaults
// =============================================================================

/// Built-in rule parameters, used wherever configuration is absent.
///
/// Each field of a configuration entry defaults independently: a
/// present entry that only sets `amount` still takes its discount value
/// and governed product codes from here.
pub mod defaults {
    use super::*;

    /// Default product code governed by the two-for-one rule.
    pub const GREEN_TEA: &str = "GR1";

    /// Default product code governed by the bulk-price rule.
    pub const STRAWBERRIES: &str = "SR1";

    /// Default product code governed by the percent-off rule.
    pub const COFFEE: &str = "CF1";

    /// Two-for-one: group size.
    pub const TWO_FOR_ONE_GROUP_SIZE: u32 = 2;

    /// Bulk price: activation threshold.
    pub const BULK_PRICE_THRESHOLD: u32 = 3;

    /// Bulk price: discounted unit price.
    pub const BULK_PRICE_UNIT: Decimal = dec!(4.50);

    /// Percent off: activation threshold.
    pub const PERCENT_OFF_THRESHOLD: u32 = 3;

    /// Percent off: fraction off each unit (a third off).
    ///
    /// Computed rather than written as a literal: one third has no
    /// finite decimal expansion, and the division carries the full
    /// 28-digit precision of [`Decimal`].
    pub fn percent_off_fraction() -> Decimal {
        Decimal::ONE / dec!(3)
    }
}

// =============================================================================
// Discount Rule
// =============================================================================

/// A quantity-discount rule for one group of same-code products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscountRule {
    /// Every unit at full price.
    NoDiscount,

    /// Charge for `ceil(quantity / group_size)` units: in every
    /// complete group of `group_size`, all but one unit are free, and a
    /// partial remainder is charged as one unit (in the customer's
    /// favor).
    FreeAfterN { group_size: u32 },

    /// Once the group reaches `threshold` units, *all* units are
    /// charged at `discounted_price` instead of the scanned price.
    /// Not tiered: below the threshold every unit is full price.
    FlatPriceAfterThreshold {
        threshold: u32,
        discounted_price: Money,
    },

    /// Once the group reaches `threshold` units, every unit is charged
    /// at `price × (1 − fraction)`.
    PercentOffAfterThreshold { threshold: u32, fraction: Decimal },
}

impl DiscountRule {
    /// Computes the charged amount for one group of same-code products.
    ///
    /// Pure function of `(rule, quantity, unit_price)`; never fails for
    /// non-negative inputs, and a quantity of zero yields zero for
    /// every rule. The result is unrounded; the checkout rounds the
    /// summed total once.
    ///
    /// ## Edge Case: zero group size
    /// `FreeAfterN { group_size: 0 }` behaves as [`NoDiscount`]
    /// (a configured zero threshold disables the rule rather than
    /// dividing by zero).
    ///
    /// [`NoDiscount`]: DiscountRule::NoDiscount
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{DiscountRule, Money};
    /// use rust_decimal_macros::dec;
    ///
    /// let two_for_one = DiscountRule::FreeAfterN { group_size: 2 };
    /// let price = Money::new(dec!(4.00));
    ///
    /// assert_eq!(two_for_one.evaluate(3, price), Money::new(dec!(8.00)));
    /// ```
    pub fn evaluate(&self, quantity: u32, unit_price: Money) -> Money {
        match self {
            DiscountRule::NoDiscount => unit_price * quantity,

            DiscountRule::FreeAfterN { group_size } => {
                if *group_size == 0 {
                    return unit_price * quantity;
                }
                let mut charged_units = quantity / group_size;
                if quantity % group_size != 0 {
                    charged_units += 1;
                }
                unit_price * charged_units
            }

            DiscountRule::FlatPriceAfterThreshold {
                threshold,
                discounted_price,
            } => {
                if quantity >= *threshold {
                    *discounted_price * quantity
                } else {
                    unit_price * quantity
                }
            }

            DiscountRule::PercentOffAfterThreshold {
                threshold,
                fraction,
            } => {
                if quantity >= *threshold {
                    unit_price.percent_off(*fraction) * quantity
                } else {
                    unit_price * quantity
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
