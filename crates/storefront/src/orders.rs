//! Order history store.

use chrono::{DateTime, Utc};
use tracing::debug;

use gourmet_core::{FulfillmentMethod, OrderId, Price};

use crate::models::{CartLine, Order};

/// Append-only ledger of finalized orders, most recent first.
#[derive(Debug, Clone, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
    version: u64,
}

impl OrderLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            orders: Vec::new(),
            version: 0,
        }
    }

    /// Record a new order and return it.
    ///
    /// The id is the number of orders already recorded plus one. No
    /// validation happens here: an empty `items` list with a zero total is a
    /// valid order.
    #[allow(clippy::indexing_slicing)] // the new record was just inserted at the front
    pub fn record(
        &mut self,
        items: Vec<CartLine>,
        total: Price,
        fulfillment: FulfillmentMethod,
        placed_at: DateTime<Utc>,
    ) -> &Order {
        let order = Order {
            id: OrderId::sequential(self.orders.len()),
            placed_at,
            items,
            total,
            fulfillment,
        };
        debug!(order_id = %order.id, lines = order.items.len(), total = %order.total, "Recorded order");
        self.orders.insert(0, order);
        self.version += 1;
        &self.orders[0]
    }

    /// Orders, most recent first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The most recently recorded order.
    #[must_use]
    pub fn latest(&self) -> Option<&Order> {
        self.orders.first()
    }

    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gourmet_core::CurrencyCode;

    use super::*;

    #[test]
    fn test_ids_follow_count() {
        let mut ledger = OrderLedger::new();
        for expected in 1..=4 {
            let id = ledger
                .record(
                    Vec::new(),
                    Price::zero(CurrencyCode::EUR),
                    FulfillmentMethod::TakeAway,
                    Utc::now(),
                )
                .id;
            assert_eq!(id, OrderId::new(expected));
        }
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_most_recent_first() {
        let mut ledger = OrderLedger::new();
        let zero = Price::zero(CurrencyCode::EUR);
        ledger.record(Vec::new(), zero, FulfillmentMethod::TakeAway, Utc::now());
        ledger.record(Vec::new(), zero, FulfillmentMethod::HomeDelivery, Utc::now());

        let ids: Vec<i32> = ledger.orders().iter().map(|o| o.id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(ledger.latest().unwrap().fulfillment, FulfillmentMethod::HomeDelivery);
        assert_eq!(ledger.get(OrderId::new(1)).unwrap().id, OrderId::new(1));
        assert_eq!(ledger.version(), 2);
    }
}
