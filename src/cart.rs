//! In-memory cart store
//!
//! The cart is an ordered sequence of product copies. Adding the same
//! product twice yields two separate entries; there is no quantity
//! aggregation. The cart lives only for the app session.

use crate::catalog::{Catalog, Product};
use crate::types::ProductId;
use tracing::debug;

/// Result of a checkout attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Cart was non-empty; it has been cleared.
    Completed,
    /// Cart was empty; nothing changed.
    EmptyCart,
}

/// Ordered cart entries, exclusively owned and mutated here.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append the product with the given id. Unknown ids are a silent
    /// no-op; returns whether an entry was appended.
    pub fn add(&mut self, catalog: &Catalog, id: ProductId) -> bool {
        match catalog.lookup(id) {
            Some(product) => {
                debug!(id, name = product.name, "Added to cart");
                self.entries.push(product.clone());
                true
            }
            None => {
                debug!(id, "Add ignored, unknown product id");
                false
            }
        }
    }

    /// Remove the entry at the given position. Out-of-range indices are a
    /// guarded no-op; returns whether an entry was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            let removed = self.entries.remove(index);
            debug!(index, name = removed.name, "Removed from cart");
            true
        } else {
            debug!(index, len = self.entries.len(), "Remove ignored, index out of range");
            false
        }
    }

    /// Sum of entry prices; 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|p| p.price).sum()
    }

    /// Clear the cart if it holds anything.
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.entries.is_empty() {
            CheckoutOutcome::EmptyCart
        } else {
            debug!(entries = self.entries.len(), total = self.total(), "Checkout");
            self.entries.clear();
            CheckoutOutcome::Completed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn total_is_sum_of_added_prices() {
        let catalog = catalog();
        let mut cart = Cart::new();
        assert!(cart.add(&catalog, 1));
        assert!(cart.add(&catalog, 2));
        let expected =
            catalog.lookup(1).unwrap().price + catalog.lookup(2).unwrap().price;
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), expected);

        // Same products in the other order sum to the same total
        let mut reversed = Cart::new();
        reversed.add(&catalog, 2);
        reversed.add(&catalog, 1);
        assert_eq!(reversed.total(), expected);
    }

    #[test]
    fn duplicates_are_separate_entries() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 3);
        cart.add(&catalog, 3);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 2 * catalog.lookup(3).unwrap().price);
    }

    #[test]
    fn unknown_id_is_a_silent_no_op() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 1);
        assert!(!cart.add(&catalog, 999));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), catalog.lookup(1).unwrap().price);
    }

    #[test]
    fn add_then_remove_last_restores_prior_state() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 4);
        let before = cart.clone();

        cart.add(&catalog, 5);
        assert!(cart.remove(cart.len() - 1));

        assert_eq!(cart.entries(), before.entries());
        assert_eq!(cart.total(), before.total());
    }

    #[test]
    fn remove_is_positional_not_by_id() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 1);
        cart.add(&catalog, 2);
        cart.add(&catalog, 3);

        assert!(cart.remove(1));

        let remaining: Vec<_> = cart.entries().iter().map(|p| p.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test]
    fn remove_out_of_range_is_a_guarded_no_op() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 1);
        assert!(!cart.remove(1));
        assert!(!cart.remove(usize::MAX));
        assert_eq!(cart.len(), 1);

        let mut empty = Cart::new();
        assert!(!empty.remove(0));
        assert!(empty.is_empty());
    }

    #[test]
    fn checkout_clears_non_empty_cart() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add(&catalog, 1);
        cart.add(&catalog, 6);

        assert_eq!(cart.checkout(), CheckoutOutcome::Completed);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn checkout_on_empty_cart_changes_nothing() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout(), CheckoutOutcome::EmptyCart);
        assert_eq!(cart.len(), 0);
    }
}
