//! # Cart
//!
//! The ordered, mutable collection of scanned products owned by one
//! checkout session.
//!
//! ## Semantics
//! - Insertion order is kept, but pricing doesn't depend on it.
//! - Removal takes the *first* entry matching a code, not all of them:
//!   scanning three teas and deleting one leaves two.
//! - A cart belongs to exactly one checkout session; sharing across
//!   threads needs external synchronization (see crate docs).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// The shopping cart: scanned products in scan order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a scanned product.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Removes the first entry whose code matches, returning it.
    ///
    /// Returns `None` (and changes nothing) when no entry matches;
    /// deleting a product that was never scanned is not an error.
    pub fn remove_first(&mut self, code: &str) -> Option<Product> {
        let position = self.items.iter().position(|p| p.code() == code)?;
        Some(self.items.remove(position))
    }

    /// Returns the scanned products in scan order.
    #[inline]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns the number of scanned products (units, not codes).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Partitions the cart contents into groups keyed by product code.
    ///
    /// Grouping is by code equality only; a `BTreeMap` keeps group
    /// iteration order deterministic for the total computation.
    pub fn group_by_code(&self) -> BTreeMap<&str, Vec<&Product>> {
        let mut groups: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
        for product in &self.items {
            groups.entry(product.code()).or_default().push(product);
        }
        groups
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use rust_decimal_macros::dec;

    fn test_product(code: &str) -> Product {
        Product::new(code, format!("Product {}", code), Money::new(dec!(9.99))).unwrap()
    }

    #[test]
    fn test_add_keeps_duplicates() {
        let mut cart = Cart::new();
        cart.add(test_product("GR1"));
        cart.add(test_product("GR1"));

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_first_takes_one_occurrence() {
        let mut cart = Cart::new();
        cart.add(test_product("GR1"));
        cart.add(test_product("SR1"));
        cart.add(test_product("GR1"));

        let removed = cart.remove_first("GR1").unwrap();
        assert_eq!(removed.code(), "GR1");

        // One GR1 remains, and the SR1 was untouched.
        assert_eq!(cart.len(), 2);
        assert_eq!(
            cart.items().iter().map(|p| p.code()).collect::<Vec<_>>(),
            vec!["SR1", "GR1"]
        );
    }

    #[test]
    fn test_remove_missing_code_is_noop() {
        let mut cart = Cart::new();
        cart.add(test_product("GR1"));

        assert!(cart.remove_first("CF1").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_group_by_code() {
        let mut cart = Cart::new();
        cart.add(test_product("SR1"));
        cart.add(test_product("GR1"));
        cart.add(test_product("SR1"));

        let groups = cart.group_by_code();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["GR1"].len(), 1);
        assert_eq!(groups["SR1"].len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(test_product("GR1"));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }
}
