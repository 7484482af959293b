//! Presentation seams
//!
//! The cart store and catalog never touch a concrete display technology.
//! A presentation layer implements [`Renderer`] and hands back the
//! interactions the user triggered this pass; the controller applies them.
//! Blocking user notices go through [`Notifier`] so the host UI decides
//! the mechanism (the egui app uses a modal dialog).

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::types::{CartAction, Notice};

/// A presentation layer for the storefront. Each call fully repaints the
/// region it controls; no diffing state is retained between calls.
pub trait Renderer {
    /// Draw the product grid. Returns interactions triggered on it.
    fn render_catalog(&mut self, catalog: &Catalog) -> Vec<CartAction>;

    /// Draw the cart panel contents: entries in insertion order (or an
    /// empty-state message), the formatted total, and the checkout
    /// control. Returns interactions triggered on it.
    fn render_cart(&mut self, cart: &Cart) -> Vec<CartAction>;
}

/// Host-supplied capability for acknowledgment-required user messages.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Single-slot notice holder. A new notice replaces any pending one; the
/// UI shows the pending notice until the user acknowledges it.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoticeQueue {
    pending: Option<Notice>,
}

impl NoticeQueue {
    pub fn pending(&self) -> Option<Notice> {
        self.pending
    }

    /// Clear the pending notice once the user has acknowledged it.
    pub fn acknowledge(&mut self) {
        self.pending = None;
    }
}

impl Notifier for NoticeQueue {
    fn notify(&mut self, notice: Notice) {
        self.pending = Some(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_queue_holds_latest_notice() {
        let mut queue = NoticeQueue::default();
        assert_eq!(queue.pending(), None);

        queue.notify(Notice::CartEmpty);
        queue.notify(Notice::CheckoutComplete);
        assert_eq!(queue.pending(), Some(Notice::CheckoutComplete));

        queue.acknowledge();
        assert_eq!(queue.pending(), None);
    }
}
