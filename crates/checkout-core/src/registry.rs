//! # Rule Registry
//!
//! Maps a product code to the discount rule that governs it.
//!
//! The registry is built once at session start from the resolved
//! configuration, is immutable afterwards, and is safe to share
//! read-only (e.g. behind an `Arc`) across any number of checkout
//! sessions. Resolution is a total function: a code no rule claims
//! falls back to [`DiscountRule::NoDiscount`].

use std::collections::HashMap;

use crate::config::{RuleConfig, RuleSettings};
use crate::money::Money;
use crate::rules::{defaults, rule_names, DiscountRule};

/// One registered rule and the product codes it governs.
#[derive(Debug, Clone)]
struct RegisteredRule {
    codes: Vec<String>,
    rule: DiscountRule,
}

/// Immutable product-code → discount-rule mapping.
///
/// Entries are kept in registration order. Governed code sets are
/// expected to be disjoint; if a configuration makes them overlap, the
/// first registered rule wins. That tie-break is deliberate and
/// deterministic, not a validation error.
///
/// ## Example
/// ```rust
/// use checkout_core::{DiscountRule, RuleRegistry};
///
/// let registry = RuleRegistry::new()
///     .register(["GR1"], DiscountRule::FreeAfterN { group_size: 2 });
///
/// assert_eq!(
///     registry.resolve("GR1"),
///     &DiscountRule::FreeAfterN { group_size: 2 }
/// );
/// // Unknown codes resolve to the fallback, never an error.
/// assert_eq!(registry.resolve("XX9"), &DiscountRule::NoDiscount);
/// ```
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    entries: Vec<RegisteredRule>,
    fallback: DiscountRule,
}

impl RuleRegistry {
    /// Creates an empty registry: every code resolves to the fallback.
    pub fn new() -> Self {
        RuleRegistry {
            entries: Vec::new(),
            fallback: DiscountRule::NoDiscount,
        }
    }

    /// Registers a rule for a set of product codes.
    ///
    /// Consumes and returns the registry so construction chains;
    /// once the registry is handed to checkout sessions there is no way
    /// to register further rules.
    pub fn register<I, S>(mut self, codes: I, rule: DiscountRule) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push(RegisteredRule {
            codes: codes.into_iter().map(Into::into).collect(),
            rule,
        });
        self
    }

    /// Returns the rule governing `code`.
    ///
    /// First registered match wins; a code no rule claims resolves to
    /// [`DiscountRule::NoDiscount`].
    pub fn resolve(&self, code: &str) -> &DiscountRule {
        self.entries
            .iter()
            .find(|entry| entry.codes.iter().any(|c| c == code))
            .map(|entry| &entry.rule)
            .unwrap_or(&self.fallback)
    }

    /// Builds the standard three-rule registry from resolved settings.
    ///
    /// Registration order (and therefore overlap tie-break order):
    /// two-for-one, bulk price, percent off.
    ///
    /// Each rule reads its configuration entry by name; each unset
    /// field falls back to the built-in default independently, and an
    /// absent entry (or an entirely empty settings map) falls back for
    /// every field.
    pub fn standard(settings: &RuleSettings) -> Self {
        let two_for_one = settings.get(rule_names::TWO_FOR_ONE);
        let bulk_price = settings.get(rule_names::BULK_PRICE);
        let percent_off = settings.get(rule_names::PERCENT_OFF);

        RuleRegistry::new()
            .register(
                governed_codes(two_for_one, defaults::GREEN_TEA),
                DiscountRule::FreeAfterN {
                    group_size: two_for_one
                        .and_then(|c| c.amount)
                        .unwrap_or(defaults::TWO_FOR_ONE_GROUP_SIZE),
                },
            )
            .register(
                governed_codes(bulk_price, defaults::STRAWBERRIES),
                DiscountRule::FlatPriceAfterThreshold {
                    threshold: bulk_price
                        .and_then(|c| c.amount)
                        .unwrap_or(defaults::BULK_PRICE_THRESHOLD),
                    discounted_price: Money::new(
                        bulk_price
                            .and_then(|c| c.discount)
                            .unwrap_or(defaults::BULK_PRICE_UNIT),
                    ),
                },
            )
            .register(
                governed_codes(percent_off, defaults::COFFEE),
                DiscountRule::PercentOffAfterThreshold {
                    threshold: percent_off
                        .and_then(|c| c.amount)
                        .unwrap_or(defaults::PERCENT_OFF_THRESHOLD),
                    fraction: percent_off
                        .and_then(|c| c.discount)
                        .unwrap_or_else(defaults::percent_off_fraction),
                },
            )
    }

    /// Builds the standard registry entirely from built-in defaults.
    pub fn with_defaults() -> Self {
        Self::standard(&HashMap::new())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The configured code list for an entry, or the built-in default.
fn governed_codes(config: Option<&RuleConfig>, default_code: &str) -> Vec<String> {
    config
        .and_then(|c| c.products.clone())
        .unwrap_or_else(|| vec![default_code.to_string()])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_resolution_is_total() {
        let registry = RuleRegistry::new();
        assert_eq!(registry.resolve("anything"), &DiscountRule::NoDiscount);
    }

    #[test]
    fn test_overlapping_code_sets_first_registered_wins() {
        let registry = RuleRegistry::new()
            .register(["GR1"], DiscountRule::FreeAfterN { group_size: 2 })
            .register(["GR1"], DiscountRule::NoDiscount);

        assert_eq!(
            registry.resolve("GR1"),
            &DiscountRule::FreeAfterN { group_size: 2 }
        );
    }

    #[test]
    fn test_standard_registry_defaults() {
        let registry = RuleRegistry::with_defaults();

        assert_eq!(
            registry.resolve(defaults::GREEN_TEA),
            &DiscountRule::FreeAfterN {
                group_size: defaults::TWO_FOR_ONE_GROUP_SIZE
            }
        );
        assert_eq!(
            registry.resolve(defaults::STRAWBERRIES),
            &DiscountRule::FlatPriceAfterThreshold {
                threshold: defaults::BULK_PRICE_THRESHOLD,
                discounted_price: Money::new(defaults::BULK_PRICE_UNIT),
            }
        );
        assert_eq!(
            registry.resolve(defaults::COFFEE),
            &DiscountRule::PercentOffAfterThreshold {
                threshold: defaults::PERCENT_OFF_THRESHOLD,
                fraction: defaults::percent_off_fraction(),
            }
        );
        assert_eq!(registry.resolve("PT1"), &DiscountRule::NoDiscount);
    }

    #[test]
    fn test_each_field_defaults_independently() {
        let mut settings = RuleSettings::new();
        settings.insert(
            rule_names::BULK_PRICE.to_string(),
            RuleConfig {
                amount: Some(4),
                discount: None,
                products: None,
            },
        );

        let registry = RuleRegistry::standard(&settings);

        // Threshold overridden; discounted price and code list kept.
        assert_eq!(
            registry.resolve(defaults::STRAWBERRIES),
            &DiscountRule::FlatPriceAfterThreshold {
                threshold: 4,
                discounted_price: Money::new(defaults::BULK_PRICE_UNIT),
            }
        );
    }

    #[test]
    fn test_configured_products_replace_the_default_code_list() {
        let mut settings = RuleSettings::new();
        settings.insert(
            rule_names::PERCENT_OFF.to_string(),
            RuleConfig {
                amount: None,
                discount: Some(dec!(0.5)),
                products: Some(vec!["CF1".to_string(), "PC1".to_string()]),
            },
        );

        let registry = RuleRegistry::standard(&settings);

        let expected = DiscountRule::PercentOffAfterThreshold {
            threshold: defaults::PERCENT_OFF_THRESHOLD,
            fraction: dec!(0.5),
        };
        assert_eq!(registry.resolve("CF1"), &expected);
        assert_eq!(registry.resolve("PC1"), &expected);
    }
}
