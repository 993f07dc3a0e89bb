//! Gourmet Storefront - the in-memory ordering session.
//!
//! Everything a gourmet-shop ordering screen keeps in memory: the catalog
//! and its filter, the cart and its totals, the order history, the message
//! and calendar panels, and the session settings. There is no persistence
//! and no I/O besides tracing events; front-ends render the session and
//! feed user interactions into it.
//!
//! # Modules
//!
//! - [`catalog`] - Fixed product catalog and category/search filtering
//! - [`cart`] - Cart store and derived subtotal/tax/total
//! - [`orders`] - Order history ledger
//! - [`inbox`] - Messaging panel
//! - [`calendar`] - Calendar panel
//! - [`settings`] - Session preferences
//! - [`dialog`] - Product detail dialog state
//! - [`notify`] - Toast notifications
//! - [`session`] - The [`Session`] facade tying the above together
//! - [`config`] - Environment-driven configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod calendar;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dialog;
pub mod inbox;
pub mod models;
pub mod notify;
pub mod orders;
pub mod session;
pub mod settings;

pub use cart::{Cart, CartTotals, TAX_RATE};
pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, LogFormat, SessionConfig};
pub use models::{CalendarEvent, CartLine, Message, Order, Product};
pub use notify::{Notifier, RecordingNotifier, Toast};
pub use session::Session;
pub use settings::Settings;
