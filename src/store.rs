//! Storefront controller
//!
//! One state object owning the cart, the cart panel state machine, and the
//! pending-notice slot. All interaction events flow through [`Storefront::apply`];
//! the presentation layer never mutates cart state directly.

use crate::cart::{Cart, CheckoutOutcome};
use crate::catalog::Catalog;
use crate::render::{Notifier, NoticeQueue};
use crate::types::{CartAction, Notice, PanelState};

pub struct Storefront {
    pub catalog: Catalog,
    pub cart: Cart,
    pub panel: PanelState,
    pub notices: NoticeQueue,
}

impl Storefront {
    pub fn new(catalog: Catalog) -> Self {
        Storefront {
            catalog,
            cart: Cart::new(),
            panel: PanelState::Closed,
            notices: NoticeQueue::default(),
        }
    }

    /// Apply one interaction event.
    ///
    /// Panel transitions: open on cart-icon activation or a successful add;
    /// close on close/overlay activation or a successful checkout.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(id) => {
                if self.cart.add(&self.catalog, id) {
                    self.panel.open();
                }
            }
            CartAction::Remove(index) => {
                self.cart.remove(index);
            }
            CartAction::Checkout => match self.cart.checkout() {
                CheckoutOutcome::Completed => {
                    self.notices.notify(Notice::CheckoutComplete);
                    self.panel.close();
                }
                CheckoutOutcome::EmptyCart => {
                    self.notices.notify(Notice::CartEmpty);
                }
            },
            CartAction::OpenCart => self.panel.open(),
            CartAction::CloseCart => self.panel.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storefront() -> Storefront {
        Storefront::new(Catalog::builtin())
    }

    #[test]
    fn panel_starts_closed_and_cart_empty() {
        let store = storefront();
        assert_eq!(store.panel, PanelState::Closed);
        assert!(store.cart.is_empty());
        assert_eq!(store.notices.pending(), None);
    }

    #[test]
    fn two_adds_give_badge_count_two_and_summed_total() {
        let mut store = storefront();
        store.apply(CartAction::Add(1));
        store.apply(CartAction::Add(2));

        assert_eq!(store.cart.len(), 2);
        let expected = store.catalog.lookup(1).unwrap().price
            + store.catalog.lookup(2).unwrap().price;
        assert_eq!(store.cart.total(), expected);
    }

    #[test]
    fn successful_add_reveals_the_cart_panel() {
        let mut store = storefront();
        store.apply(CartAction::Add(1));
        assert!(store.panel.is_open());
    }

    #[test]
    fn unknown_id_add_neither_mutates_nor_opens() {
        let mut store = storefront();
        store.apply(CartAction::Add(999));
        assert!(store.cart.is_empty());
        assert_eq!(store.panel, PanelState::Closed);
        assert_eq!(store.notices.pending(), None);
    }

    #[test]
    fn removal_is_by_position() {
        let mut store = storefront();
        store.apply(CartAction::Add(1));
        store.apply(CartAction::Add(2));
        store.apply(CartAction::Add(3));

        store.apply(CartAction::Remove(1));

        let ids: Vec<_> = store.cart.entries().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn checkout_clears_cart_closes_panel_and_notifies() {
        let mut store = storefront();
        store.apply(CartAction::Add(4));
        store.apply(CartAction::Add(5));
        assert!(store.panel.is_open());

        store.apply(CartAction::Checkout);

        assert!(store.cart.is_empty());
        assert_eq!(store.panel, PanelState::Closed);
        assert_eq!(store.notices.pending(), Some(Notice::CheckoutComplete));
    }

    #[test]
    fn empty_checkout_notifies_without_closing() {
        let mut store = storefront();
        store.apply(CartAction::OpenCart);

        store.apply(CartAction::Checkout);

        assert_eq!(store.cart.len(), 0);
        assert!(store.panel.is_open());
        assert_eq!(store.notices.pending(), Some(Notice::CartEmpty));
    }

    #[test]
    fn open_and_close_transitions() {
        let mut store = storefront();
        store.apply(CartAction::OpenCart);
        assert!(store.panel.is_open());
        store.apply(CartAction::CloseCart);
        assert_eq!(store.panel, PanelState::Closed);
    }
}
