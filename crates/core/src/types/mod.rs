//! Core types for Gourmet Orders.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod parse;
pub mod preference;
pub mod price;
pub mod view;

pub use category::{Category, CategoryFilter};
pub use id::*;
pub use parse::ParseError;
pub use preference::Language;
pub use price::{CurrencyCode, Price};
pub use view::{FulfillmentMethod, View};
