//! Finalized order record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gourmet_core::{FulfillmentMethod, OrderId, Price};

use super::product::CartLine;

/// A finalized order: an immutable snapshot of the cart at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential id (`orders placed before this one + 1`).
    pub id: OrderId,
    /// When the order was finalized.
    pub placed_at: DateTime<Utc>,
    /// Cart lines as they were when the order was finalized. May be empty.
    pub items: Vec<CartLine>,
    /// Subtotal plus tax at finalize time.
    pub total: Price,
    /// Fulfillment method selected when the order was finalized.
    pub fulfillment: FulfillmentMethod,
}
