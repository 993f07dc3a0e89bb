//! Gourmet Core - Shared types library.
//!
//! This crate provides common types used across all Gourmet Orders components:
//! - `storefront` - The in-memory ordering session (catalog, cart, orders, panels)
//! - `cli` - Terminal front-end that drives a session
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no clocks, no
//! logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, plus the
//!   enumerations shared by the session and its front-ends

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
