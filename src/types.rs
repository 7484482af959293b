//! Common types and data structures

/// Unique catalog identifier for a product.
pub type ProductId = u32;

/// Interaction events emitted by the renderer and applied by the
/// storefront controller. Controls reference products by id and cart
/// rows by position, never by callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartAction {
    /// "Add to cart" control on a catalog card.
    Add(ProductId),
    /// Remove control on a cart row; the index is the row's position
    /// in insertion order, not a product id.
    Remove(usize),
    /// Checkout control in the cart panel footer.
    Checkout,
    /// Cart icon in the header.
    OpenCart,
    /// Close button or overlay click.
    CloseCart,
}

/// Visibility state of the slide-in cart panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }

    pub fn open(&mut self) {
        *self = PanelState::Open;
    }

    pub fn close(&mut self) {
        *self = PanelState::Closed;
    }
}

/// User-facing notices requiring acknowledgment before interaction resumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    CheckoutComplete,
    CartEmpty,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::CheckoutComplete => {
                "Thank you for choosing SK Mobile Zone! Proceeding to the checkout page..."
            }
            Notice::CartEmpty => "Your cart is empty!",
        }
    }
}
