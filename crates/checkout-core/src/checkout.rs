//! # Checkout
//!
//! One checkout session: a cart plus the shared rule registry.
//!
//! ## Total Computation Flow
//! ```text
//! scan / delete ──► Cart (mutable, per session)
//!                     │
//! total() ──► group by product code
//!                     │
//!             RuleRegistry::resolve(code)      (shared, read-only)
//!                     │
//!             DiscountRule::evaluate(count, representative price)
//!                     │
//!             sum groups ──► round once to 2 decimal places
//! ```
//!
//! `total()` is a pure read over the current cart: it can be called
//! repeatedly for a running subtotal and never mutates state. There is
//! no "currently selected rule" slot anywhere — resolution and
//! evaluation happen in one stateless pass per group.

use std::sync::Arc;

use crate::cart::Cart;
use crate::money::Money;
use crate::product::Product;
use crate::registry::RuleRegistry;

/// A checkout session.
///
/// Owns its [`Cart`] exclusively; the [`RuleRegistry`] is shared
/// read-only across sessions via `Arc`. One session serves one logical
/// customer — share a session across threads only behind external
/// synchronization, since `scan`/`delete` mutate the cart.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use checkout_core::{Checkout, Money, Product, RuleRegistry};
/// use rust_decimal_macros::dec;
///
/// let registry = Arc::new(RuleRegistry::with_defaults());
/// let mut checkout = Checkout::new(registry);
///
/// let tea = Product::new("GR1", "Green Tea", Money::new(dec!(3.11))).unwrap();
/// checkout.scan(tea.clone());
/// checkout.scan(tea);
///
/// // Two-for-one on green tea: two units cost one.
/// assert_eq!(checkout.total(), Money::new(dec!(3.11)));
/// ```
#[derive(Debug)]
pub struct Checkout {
    cart: Cart,
    registry: Arc<RuleRegistry>,
}

impl Checkout {
    /// Creates a session with an empty cart.
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Checkout {
            cart: Cart::new(),
            registry,
        }
    }

    /// Scans a product into the cart.
    ///
    /// No validation happens here: a [`Product`] proves its own
    /// invariants at construction.
    pub fn scan(&mut self, product: Product) {
        self.cart.add(product);
    }

    /// Removes the first cart entry matching the product's code.
    ///
    /// A no-op (not an error) when no entry matches.
    pub fn delete(&mut self, product: &Product) {
        self.cart.remove_first(product.code());
    }

    /// Returns a defensive copy of the current cart contents.
    ///
    /// Callers can't reach the internal cart through the returned
    /// products.
    pub fn list_cart(&self) -> Vec<Product> {
        self.cart.items().to_vec()
    }

    /// Computes the total price of the cart under the discount rules.
    ///
    /// Groups the cart by product code, resolves each group's rule,
    /// evaluates it with the group count and a representative unit
    /// price (the first scanned unit — same-code scans are assumed
    /// price-consistent), sums the group results, and rounds once to
    /// 2 decimal places. An empty cart totals 0.00.
    pub fn total(&self) -> Money {
        let mut total = Money::zero();

        for (code, group) in self.cart.group_by_code() {
            let rule = self.registry.resolve(code);
            let representative_price = group[0].price();
            total += rule.evaluate(group.len() as u32, representative_price);
        }

        total.rounded()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
