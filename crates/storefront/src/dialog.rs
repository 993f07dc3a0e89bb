//! Product detail dialog state.
//!
//! `Closed -> Open(product) -> Closed`. Only an open dialog can put its
//! product into the cart.

use crate::models::Product;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProductDialog {
    #[default]
    Closed,
    Open(Product),
}

impl ProductDialog {
    /// Show `product`, replacing whatever was shown before.
    pub fn open(&mut self, product: Product) {
        *self = Self::Open(product);
    }

    /// Close the dialog, returning the product it was showing.
    pub fn close(&mut self) -> Option<Product> {
        match std::mem::take(self) {
            Self::Open(product) => Some(product),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&Product> {
        match self {
            Self::Open(product) => Some(product),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::Catalog;

    use super::*;

    #[test]
    fn test_open_then_close() {
        let product = Catalog::gourmet().products().first().cloned().unwrap();
        let mut dialog = ProductDialog::default();
        assert!(!dialog.is_open());

        dialog.open(product.clone());
        assert_eq!(dialog.selected(), Some(&product));

        assert_eq!(dialog.close(), Some(product));
        assert!(!dialog.is_open());
        assert_eq!(dialog.close(), None);
    }
}
