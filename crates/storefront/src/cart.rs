//! The shopping cart store and its derived totals.
//!
//! The cart is an ordered list of [`CartLine`]s. Lines keep insertion order,
//! so the first product added is shown first. Every effective mutation bumps
//! [`Cart::version`], which front-ends use to know when derived views
//! (totals, line list) must be re-rendered.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use gourmet_core::{CurrencyCode, Price, ProductId};

use crate::models::{CartLine, Product};

/// Value-added tax applied to the cart subtotal (21%).
pub const TAX_RATE: Decimal = Decimal::from_parts(21, 0, 0, false, 2);

/// Subtotal, tax and total derived from the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// `Σ price × quantity`, saturating at `Decimal::MAX`.
    pub subtotal: Price,
    /// `subtotal × TAX_RATE`.
    pub tax: Price,
    /// `subtotal + tax`.
    pub total: Price,
}

impl CartTotals {
    /// Compute totals for a set of lines.
    #[must_use]
    pub fn from_lines(lines: &[CartLine], currency_code: CurrencyCode) -> Self {
        let subtotal = lines
            .iter()
            .map(|line| line.line_total().amount)
            .fold(Decimal::ZERO, Decimal::saturating_add);
        let tax = subtotal.saturating_mul(TAX_RATE);
        Self {
            subtotal: Price::new(subtotal, currency_code),
            tax: Price::new(tax, currency_code),
            total: Price::new(subtotal.saturating_add(tax), currency_code),
        }
    }
}

/// The current, unfinished order.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency_code: CurrencyCode,
    version: u64,
}

impl Cart {
    /// An empty cart priced in `currency_code`.
    #[must_use]
    pub const fn new(currency_code: CurrencyCode) -> Self {
        Self {
            lines: Vec::new(),
            currency_code,
            version: 0,
        }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Mutation counter; unchanged by no-op operations.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for this product id, or appends a new
    /// line with quantity 1. Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        let quantity = if let Some(line) = self.lines.iter_mut().find(|line| line.id() == product.id)
        {
            line.quantity = line.quantity.saturating_add(1);
            line.quantity
        } else {
            self.lines.push(CartLine::new(product.clone()));
            1
        };
        self.version += 1;
        debug!(product_id = %product.id, quantity, "Added product to cart");
        quantity
    }

    /// Change the quantity of the line for `id` by `delta`, clamping at zero.
    ///
    /// A line that reaches zero is removed. Returns the resulting quantity
    /// (`Some(0)` when the line was removed), or `None` when no line has
    /// this id, in which case the cart is left untouched.
    pub fn adjust_quantity(&mut self, id: ProductId, delta: i32) -> Option<u32> {
        let index = self.lines.iter().position(|line| line.id() == id)?;
        let line = self.lines.get_mut(index)?;
        let quantity = u32::try_from((i64::from(line.quantity) + i64::from(delta)).max(0))
            .unwrap_or(u32::MAX);

        if quantity == line.quantity {
            return Some(quantity);
        }

        if quantity == 0 {
            self.lines.remove(index);
        } else {
            line.quantity = quantity;
        }
        self.version += 1;
        debug!(product_id = %id, delta, quantity, "Adjusted cart quantity");
        Some(quantity)
    }

    /// Subtotal, tax and total for the current lines.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::from_lines(&self.lines, self.currency_code)
    }

    /// Remove and return every line, leaving the cart empty.
    pub fn take_lines(&mut self) -> Vec<CartLine> {
        self.version += 1;
        std::mem::take(&mut self.lines)
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        if !self.lines.is_empty() {
            self.lines.clear();
            self.version += 1;
        }
    }
}
