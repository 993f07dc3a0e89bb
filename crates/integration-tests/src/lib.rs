//! Integration tests for Gourmet Orders.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p gourmet-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `ordering_flow` - Browsing, cart and checkout through a `Session`
//! - `order_ids` - Order numbering across checkout sequences
//! - `side_panels` - Messages, calendar and settings
//!
//! Shared helpers live in this library so every test file builds sessions
//! the same way.

use rust_decimal::Decimal;

use gourmet_core::{Category, CurrencyCode, Price, ProductId};
use gourmet_storefront::{Catalog, Product, RecordingNotifier, Session, Settings};

/// A session over the built-in catalog that records its toasts.
#[must_use]
pub fn gourmet_session() -> Session<RecordingNotifier> {
    Session::gourmet(RecordingNotifier::new())
}

/// A product with the given id and price in cents.
#[must_use]
pub fn product(id: i32, name: &str, cents: i64, category: Category) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from_cents(cents, CurrencyCode::EUR),
        image: String::new(),
        available: 100,
        description: String::new(),
        category,
    }
}

/// A session over a two-product catalog priced at 10.00 and 5.00.
///
/// # Panics
///
/// Never: the catalog has distinct ids and positive prices.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn ten_and_five_session() -> Session<RecordingNotifier> {
    let catalog = Catalog::new(vec![
        product(1, "Ten", 1000, Category::Delicatessen),
        product(2, "Five", 500, Category::Delicatessen),
    ])
    .unwrap();
    Session::new(catalog, Settings::default(), RecordingNotifier::new())
}

/// Shorthand for a two-decimal amount.
#[must_use]
pub fn euros(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
