//! Product and cart line domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use gourmet_core::{Category, Price, ProductId};

/// A purchasable catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the catalog.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price (never negative in a validated catalog).
    pub price: Price,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Units in stock. Informational only; the cart does not reserve stock.
    pub available: u32,
    /// Short description shown on the card and in the product dialog.
    pub description: String,
    /// Category used by the catalog filter.
    pub category: Category,
}

/// One product in the cart together with the requested quantity.
///
/// Always holds `quantity > 0`; the cart drops a line as soon as its
/// quantity reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// A fresh line holding one unit of `product`.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// The product id this line refers to.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    /// `price × quantity` for this line, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.product.price.amount.saturating_mul(Decimal::from(self.quantity)),
            self.product.price.currency_code,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gourmet_core::CurrencyCode;

    use super::*;

    fn brie() -> Product {
        Product {
            id: ProductId::new(4),
            name: "Queso Brie Trufado".to_string(),
            price: Price::from_cents(1999, CurrencyCode::EUR),
            image: "/placeholder.svg".to_string(),
            available: 30,
            description: "Queso Brie con trozos de trufa negra".to_string(),
            category: Category::Cheeses,
        }
    }

    #[test]
    fn test_line_total() {
        let mut line = CartLine::new(brie());
        line.quantity = 3;
        assert_eq!(line.line_total().amount, Decimal::new(5997, 2));
    }

    #[test]
    fn test_line_total_saturates() {
        let mut product = brie();
        product.price.amount = Decimal::MAX;
        let mut line = CartLine::new(product);
        line.quantity = u32::MAX;
        assert_eq!(line.line_total().amount, Decimal::MAX);
    }

    #[test]
    fn test_cart_line_serializes_flat() {
        let line = CartLine::new(brie());
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["quantity"], 1);
        assert_eq!(json["category"], "cheeses");
    }
}
