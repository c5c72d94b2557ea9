//! # checkout-core: Pure Pricing Logic for the Store Checkout
//!
//! This crate is the heart of the checkout: the mapping from a multiset
//! of scanned products to a total price, via per-product-code discount
//! rules selected and parameterized from external configuration.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Store Checkout Architecture                    │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │          Collaborators (outside this crate)                   │  │
//! │  │   scanning UI / menu  ──  rule-settings file (checkout-config)│  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │             ★ checkout-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌────────┐ ┌──────────┐ ┌─────────┐  │  │
//! │  │  │  money  │ │ product │ │  cart  │ │  rules   │ │registry │  │  │
//! │  │  │  Money  │ │ Product │ │  Cart  │ │ Discount │ │  Rule   │  │  │
//! │  │  │         │ │         │ │        │ │   Rule   │ │Registry │  │  │
//! │  │  └─────────┘ └─────────┘ └────────┘ └──────────┘ └─────────┘  │  │
//! │  │                       ┌──────────┐                            │  │
//! │  │                       │ checkout │  scan/delete/list/total    │  │
//! │  │                       └──────────┘                            │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS             │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money` with the checkout rounding rule
//! - [`error`] - Domain error types
//! - [`validation`] - Scanned-record field validation
//! - [`product`] - The immutable scanned product value
//! - [`cart`] - Ordered cart with first-occurrence removal and grouping
//! - [`rules`] - The closed `DiscountRule` sum type and its evaluation
//! - [`config`] - The externally supplied rule parameter types
//! - [`registry`] - Product code → rule resolution with fallback
//! - [`checkout`] - The orchestrating session
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same cart + same registry = same total
//! 2. **No I/O**: reading the rule-settings file lives in checkout-config
//! 3. **Decimal money**: exact base-10 arithmetic, rounded once per total
//! 4. **Degrade, don't fail**: unknown codes, missing configuration and
//!    zero thresholds all fall back to no-discount behavior
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_core::{Checkout, Money, Product, RuleRegistry};
//! use rust_decimal_macros::dec;
//!
//! // Registry built once (here from built-in defaults), shared by all
//! // sessions.
//! let registry = Arc::new(RuleRegistry::with_defaults());
//!
//! let mut checkout = Checkout::new(registry);
//! let strawberries = Product::new("SR1", "Strawberries", Money::new(dec!(5.00))).unwrap();
//!
//! checkout.scan(strawberries.clone());
//! checkout.scan(strawberries.clone());
//! checkout.scan(strawberries);
//!
//! // Three packs trigger the flat 4.50 bulk price.
//! assert_eq!(checkout.total(), Money::new(dec!(13.50)));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod money;
pub mod product;
pub mod registry;
pub mod rules;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Checkout` instead of
// `use checkout_core::checkout::Checkout`.

pub use cart::Cart;
pub use checkout::Checkout;
pub use config::{RuleConfig, RuleSettings};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use product::Product;
pub use registry::RuleRegistry;
pub use rules::{defaults, rule_names, DiscountRule};
