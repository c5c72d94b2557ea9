//! # Rule Configuration
//!
//! The externally supplied parameter set the discount engine consumes.
//!
//! The configuration collaborator produces a mapping from rule name to
//! [`RuleConfig`]; the core only reads it. Every field is optional and
//! defaults independently, and a rule name missing from the mapping
//! means "use built-in defaults entirely" — including the mapping being
//! empty because no configuration source was found.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Externally configured parameters for one named rule.
///
/// ## Fields
/// - `amount`: threshold quantity (group size for the two-for-one rule)
/// - `discount`: discounted unit price, or fraction off, depending on
///   the rule shape the name selects
/// - `products`: the product codes the rule governs
///
/// Partial overrides are legal and common: `{ "amount": 5 }` changes
/// only the threshold and keeps the built-in discount value and code
/// list. PascalCase aliases accept documents written for the original
/// configuration format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Threshold quantity at which the discount activates.
    #[serde(default, alias = "Amount")]
    pub amount: Option<u32>,

    /// Discount value; interpretation depends on the rule shape.
    #[serde(default, alias = "Discount")]
    pub discount: Option<Decimal>,

    /// Product codes governed by this rule.
    #[serde(default, alias = "Products")]
    pub products: Option<Vec<String>>,
}

/// The full externally supplied configuration: rule name → parameters.
pub type RuleSettings = HashMap<String, RuleConfig>;

// =============================================================================
// Unit Tests
// =============================================================================
