//! Toast notifications.
//!
//! The session reports user-visible confirmations through a [`Notifier`].
//! [`RecordingNotifier`] emits each toast as an `info` event and keeps it
//! until the front-end drains it for display.

use serde::Serialize;
use tracing::info;

use crate::models::{Order, Product};

/// A transient confirmation shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Confirmation for a product added to the cart.
    #[must_use]
    pub fn product_added(product: &Product) -> Self {
        Self::new(
            "Product added",
            format!("{} has been added to your order.", product.name),
        )
    }

    /// Confirmation for a finalized order.
    #[must_use]
    pub fn order_placed(order: &Order) -> Self {
        Self::new(
            "Order placed",
            format!(
                "Your order #{} for {}{} has been processed. Thank you for your purchase!",
                order.id,
                order.total.currency_code.symbol(),
                order.total.formatted_amount()
            ),
        )
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

/// Receiver of session toasts.
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Logs every toast and keeps it in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Vec<Toast>,
}

impl RecordingNotifier {
    #[must_use]
    pub const fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, toast: Toast) {
        info!(title = %toast.title, description = %toast.description, "Notification");
        self.toasts.push(toast);
    }
}
